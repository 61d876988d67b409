//! Sub-configuration structs with defaults matching the original tool.

use serde::{Deserialize, Serialize};

/// Input size limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum input file size in KiB, inclusive. A file of exactly this
    /// size passes validation.
    pub max_file_size_kib: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_kib: 75,
        }
    }
}

/// Thumbnail rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Maximum thumbnail edge in pixels. The rendered copy fits within a
    /// max_edge × max_edge box, aspect preserving, never upscaled.
    pub max_edge: u32,

    /// Output format for the display surface. Only "png" is supported.
    pub format: String,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            max_edge: 200,
            format: "png".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
