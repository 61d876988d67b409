//! The `b64pix encode` command.

use clap::Args;
use std::path::PathBuf;

use b64pix_core::{B64pix, Config, EncodeReport};

/// Arguments for the `encode` command.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Image file to encode
    pub path: PathBuf,

    /// Write the payload to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a JSON report instead of the bare payload
    #[arg(long)]
    pub json: bool,

    /// Skip the size check
    #[arg(long)]
    pub force: bool,
}

/// Execute the encode command.
pub fn execute(config: &Config, args: EncodeArgs) -> anyhow::Result<()> {
    let pipeline = B64pix::new(config.clone());

    let size_bytes = if args.force {
        std::fs::metadata(&args.path)?.len()
    } else {
        pipeline.check_size(&args.path)?.require_within(&args.path)?
    };

    let payload = pipeline.encode_file(&args.path)?;
    tracing::info!(
        "Encoded {} ({} bytes -> {} Base64 chars)",
        args.path.display(),
        size_bytes,
        payload.len()
    );

    let output = if args.json {
        let report = EncodeReport {
            path: args.path.display().to_string(),
            size_bytes,
            base64: payload,
        };
        serde_json::to_string_pretty(&report)?
    } else {
        payload
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, output)?;
            tracing::info!("Payload written to {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use b64pix_core::{Encoder, PipelineError};

    #[test]
    fn execute_writes_payload_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let out = dir.path().join("payload.txt");
        std::fs::write(&input, b"hello").unwrap();

        let args = EncodeArgs {
            path: input,
            output: Some(out.clone()),
            json: false,
            force: false,
        };
        execute(&Config::default(), args).unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "aGVsbG8=");
    }

    #[test]
    fn execute_oversize_file_warns_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("big.bin");
        let out = dir.path().join("payload.txt");
        std::fs::write(&input, vec![7u8; 100 * 1024]).unwrap();

        let args = EncodeArgs {
            path: input.clone(),
            output: Some(out.clone()),
            json: false,
            force: false,
        };
        let err = execute(&Config::default(), args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::FileTooLarge { .. })
        ));
        assert!(!out.exists());

        let args = EncodeArgs {
            path: input.clone(),
            output: Some(out.clone()),
            json: false,
            force: true,
        };
        execute(&Config::default(), args).unwrap();
        let expected = Encoder.encode_bytes(&std::fs::read(&input).unwrap());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
    }

    #[test]
    fn execute_json_report_names_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let out = dir.path().join("report.json");
        std::fs::write(&input, b"abc").unwrap();

        let args = EncodeArgs {
            path: input.clone(),
            output: Some(out.clone()),
            json: true,
            force: false,
        };
        execute(&Config::default(), args).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(report["size_bytes"], 3);
        assert_eq!(report["base64"], "YWJj");
    }
}
