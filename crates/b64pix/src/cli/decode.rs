//! The `b64pix decode` command.

use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use b64pix_core::pipeline::format_to_string;
use b64pix_core::{B64pix, Config, DecodeReport};

/// Arguments for the `decode` command.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Base64 payload (reads stdin when omitted and --input is not set)
    pub payload: Option<String>,

    /// Read the payload from a file
    #[arg(short, long, conflicts_with = "payload")]
    pub input: Option<PathBuf>,

    /// Write the thumbnail PNG to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a JSON report instead of the display string
    #[arg(long)]
    pub json: bool,
}

/// Resolve the payload source: argument first, then file, then stdin.
fn read_payload(payload: Option<String>, input: Option<&PathBuf>) -> anyhow::Result<String> {
    match (payload, input) {
        (Some(payload), _) => Ok(payload),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Execute the decode command.
pub fn execute(config: &Config, args: DecodeArgs) -> anyhow::Result<()> {
    let pipeline = B64pix::new(config.clone());

    let payload = read_payload(args.payload, args.input.as_ref())?;

    let (decoded, thumbnail) = pipeline.decode_to_thumbnail(&payload)?;
    tracing::info!(
        "Decoded {} image {}x{} ({} bytes), thumbnail {}x{}",
        format_to_string(decoded.format),
        decoded.width,
        decoded.height,
        decoded.byte_len,
        thumbnail.width,
        thumbnail.height
    );

    if let Some(path) = &args.output {
        // The thumbnail is what gets written, not the original payload
        // bytes; the decode path always re-renders.
        std::fs::write(path, thumbnail.png_bytes())?;
        tracing::info!("Thumbnail written to {}", path.display());
    }

    if args.json {
        let report = DecodeReport {
            format: format_to_string(decoded.format),
            width: decoded.width,
            height: decoded.height,
            payload_bytes: decoded.byte_len,
            thumbnail_width: thumbnail.width,
            thumbnail_height: thumbnail.height,
            thumbnail_base64: thumbnail.to_base64(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.output.is_none() {
        // Display string for an image widget: Base64-encoded PNG
        println!("{}", thumbnail.to_base64());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use b64pix_core::PipelineError;

    // 1x1 transparent PNG
    const PNG_1X1_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJ\
         AAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn read_payload_prefers_argument_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.txt");
        std::fs::write(&path, "from-file").unwrap();

        let payload = read_payload(Some("from-arg".to_string()), Some(&path)).unwrap();
        assert_eq!(payload, "from-arg");
    }

    #[test]
    fn read_payload_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.txt");
        std::fs::write(&path, "from-file").unwrap();

        let payload = read_payload(None, Some(&path)).unwrap();
        assert_eq!(payload, "from-file");
    }

    #[test]
    fn read_payload_missing_file_is_error() {
        let path = PathBuf::from("/nonexistent/payload.txt");
        assert!(read_payload(None, Some(&path)).is_err());
    }

    #[test]
    fn execute_writes_thumbnail_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("thumb.png");
        let args = DecodeArgs {
            payload: Some(PNG_1X1_BASE64.to_string()),
            input: None,
            output: Some(out.clone()),
            json: false,
        };

        execute(&Config::default(), args).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[0..4], b"\x89PNG");
    }

    #[test]
    fn execute_rejects_blank_payload() {
        let args = DecodeArgs {
            payload: Some("   ".to_string()),
            input: None,
            output: None,
            json: false,
        };

        let err = execute(&Config::default(), args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::EmptyInput)
        ));
    }
}
