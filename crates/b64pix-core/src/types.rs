//! Output report types for machine-readable shell output.

use serde::Serialize;

/// Result of an encode action, for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeReport {
    /// Source file path
    pub path: String,
    /// Source file size in bytes
    pub size_bytes: u64,
    /// The Base64 payload
    pub base64: String,
}

/// Result of a decode action, for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    /// Detected image format of the decoded payload
    pub format: String,
    /// Decoded image width in pixels
    pub width: u32,
    /// Decoded image height in pixels
    pub height: u32,
    /// Decoded payload size in bytes
    pub payload_bytes: u64,
    /// Thumbnail width in pixels
    pub thumbnail_width: u32,
    /// Thumbnail height in pixels
    pub thumbnail_height: u32,
    /// Base64-encoded PNG for the display surface
    pub thumbnail_base64: String,
}
