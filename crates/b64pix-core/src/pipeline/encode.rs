//! File to Base64 encoding.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

/// Encodes files as RFC 4648 standard Base64 (padded, no line wrapping).
pub struct Encoder;

impl Encoder {
    /// Read the whole file and encode its bytes.
    ///
    /// Performs no size check; callers validate first. A missing or
    /// unreadable path is a `Read` error.
    pub fn encode_file(&self, path: &Path) -> PipelineResult<String> {
        let bytes = std::fs::read(path).map_err(|e| PipelineError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!("Encoding {} bytes from {}", bytes.len(), path.display());
        Ok(BASE64.encode(bytes))
    }

    /// Encode an in-memory buffer.
    pub fn encode_bytes(&self, bytes: &[u8]) -> String {
        BASE64.encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_is_byte_exact() {
        // Standard Base64 round-trips arbitrary bytes, image or not
        let payload: Vec<u8> = (0..=255u8).cycle().take(76800).collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bin");
        std::fs::write(&path, &payload).unwrap();

        let encoded = Encoder.encode_file(&path).unwrap();
        assert!(encoded.is_ascii());
        let decoded = BASE64.decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(Encoder.encode_bytes(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Encoder
            .encode_file(Path::new("/nonexistent/input.png"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Read { .. }));
    }

    #[test]
    fn test_encoder_does_not_size_check() {
        // A file over the 75 KiB limit still encodes; validation is the
        // caller's job
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        std::fs::write(&path, vec![7u8; 100 * 1024]).unwrap();

        assert!(Encoder.encode_file(&path).is_ok());
    }
}
