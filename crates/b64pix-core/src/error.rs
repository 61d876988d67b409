//! Error types for the b64pix pipeline.
//!
//! Every pipeline failure is recoverable at the point of the user action;
//! each error carries a [`Severity`] so the shell can decide how loudly to
//! report it.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for b64pix operations.
#[derive(Error, Debug)]
pub enum B64pixError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline errors, one variant per failure the UI has to surface.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// An encode was requested before any file was selected
    #[error("No file selected")]
    NoFileSelected,

    /// File exceeds the size limit. Sizes are in KiB, rounded up so a file
    /// one byte over the limit never reports the same size as the limit.
    #[error("File too large: {path} ({size_kib} KiB exceeds limit of {limit_kib} KiB)")]
    FileTooLarge {
        path: PathBuf,
        size_kib: u64,
        limit_kib: u64,
    },

    /// Path is missing or unreadable
    #[error("Cannot read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Input is not valid standard Base64
    #[error("Invalid Base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Bytes decoded fine as Base64 but are not a recognizable image
    #[error("Decoded bytes are not a decodable image: {message}")]
    ImageFormat { message: String },

    /// The decode field was blank
    #[error("No Base64 input provided")]
    EmptyInput,
}

/// How the shell should present a pipeline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocking problem; the requested action did not happen
    Error,
    /// Recognized outcome the user can fix (e.g. pick a smaller file)
    Warning,
}

impl PipelineError {
    /// Severity for the shell's modal/report. Only the oversized-file case
    /// is a warning; everything else blocks the action.
    pub fn severity(&self) -> Severity {
        match self {
            PipelineError::FileTooLarge { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Convenience type alias for b64pix results.
pub type Result<T> = std::result::Result<T, B64pixError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
