//! File size validation before encoding.

use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};

/// Outcome of a size check. Oversize is a recognized result the shell warns
/// about, not an error in itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCheck {
    /// File is at or under the limit
    Within { bytes: u64 },
    /// File is over the limit
    TooLarge { bytes: u64, limit_bytes: u64 },
}

impl SizeCheck {
    /// Whether the file passed validation.
    pub fn is_within(&self) -> bool {
        matches!(self, SizeCheck::Within { .. })
    }

    /// Convert an oversize outcome into the error the shell surfaces.
    ///
    /// Sizes are reported in KiB rounded up, so a file one byte over the
    /// limit reads as 76 KiB rather than repeating the 75 KiB limit.
    pub fn require_within(self, path: &Path) -> PipelineResult<u64> {
        match self {
            SizeCheck::Within { bytes } => Ok(bytes),
            SizeCheck::TooLarge { bytes, limit_bytes } => Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_kib: bytes.div_ceil(1024),
                limit_kib: limit_bytes / 1024,
            }),
        }
    }
}

/// Validates input files against the configured size limit.
pub struct Validator {
    limit_bytes: u64,
}

impl Validator {
    /// Create a new validator with the given limits.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            limit_bytes: limits.max_file_size_kib * 1024,
        }
    }

    /// Check the file's length from filesystem metadata.
    ///
    /// The limit is inclusive: a file of exactly the limit passes. Only the
    /// metadata is read; the file contents are not touched.
    pub fn check(&self, path: &Path) -> PipelineResult<SizeCheck> {
        let metadata = std::fs::metadata(path).map_err(|e| PipelineError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let bytes = metadata.len();
        if bytes <= self.limit_bytes {
            Ok(SizeCheck::Within { bytes })
        } else {
            tracing::debug!(
                "Size check failed for {}: {} bytes > {} bytes",
                path.display(),
                bytes,
                self.limit_bytes
            );
            Ok(SizeCheck::TooLarge {
                bytes,
                limit_bytes: self.limit_bytes,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::new(&LimitsConfig::default())
    }

    fn temp_file_of_len(dir: &tempfile::TempDir, len: usize) -> std::path::PathBuf {
        let path = dir.path().join("input.bin");
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn test_exactly_at_limit_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file_of_len(&dir, 76800);
        let check = validator().check(&path).unwrap();
        assert!(check.is_within());
    }

    #[test]
    fn test_one_byte_over_limit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file_of_len(&dir, 76801);
        let check = validator().check(&path).unwrap();
        assert!(!check.is_within());
    }

    #[test]
    fn test_oversize_message_reports_sizes_in_kib() {
        // A 100 KiB file against the 75 KiB limit
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file_of_len(&dir, 100 * 1024);
        let check = validator().check(&path).unwrap();
        let err = check.require_within(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("75"));
    }

    #[test]
    fn test_just_over_limit_rounds_up() {
        // 76801 bytes must not report "75 KiB exceeds limit of 75 KiB"
        let dir = tempfile::tempdir().unwrap();
        let path = temp_file_of_len(&dir, 76801);
        let check = validator().check(&path).unwrap();
        let err = check.require_within(&path).unwrap_err();
        assert!(err.to_string().contains("76 KiB"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = validator()
            .check(Path::new("/nonexistent/input.png"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Read { .. }));
    }
}
