//! The `b64pix check` command for size validation.

use clap::Args;
use std::path::PathBuf;

use b64pix_core::{B64pix, Config};

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to check against the size limit
    pub path: PathBuf,
}

/// Execute the check command. Exits non-zero with a warning when the file
/// is over the limit.
pub fn execute(config: &Config, args: CheckArgs) -> anyhow::Result<()> {
    let pipeline = B64pix::new(config.clone());
    let bytes = pipeline.check_size(&args.path)?.require_within(&args.path)?;

    println!(
        "{}: {} bytes, within the {} KiB limit",
        args.path.display(),
        bytes,
        config.limits.max_file_size_kib
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use b64pix_core::PipelineError;

    #[test]
    fn execute_passes_file_at_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bin");
        std::fs::write(&path, vec![0u8; 76800]).unwrap();

        let args = CheckArgs { path };
        assert!(execute(&Config::default(), args).is_ok());
    }

    #[test]
    fn execute_fails_file_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bin");
        std::fs::write(&path, vec![0u8; 76801]).unwrap();

        let args = CheckArgs { path };
        let err = execute(&Config::default(), args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::FileTooLarge { .. })
        ));
    }
}
