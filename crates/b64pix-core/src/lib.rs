//! b64pix Core - Base64 image encode/decode pipeline.
//!
//! The pipeline turns a selected image file into a Base64 payload and a
//! pasted Base64 payload back into a bounded thumbnail:
//!
//! ```text
//! File → Validate (≤ 75 KiB) → Encode → Base64 string
//! Base64 string → Decode → Thumbnail (≤ 200×200 PNG) → display string
//! ```
//!
//! Every stage is a pure, synchronous call returning a typed result; the
//! shell decides how failures are presented.
//!
//! # Usage
//!
//! ```rust
//! use b64pix_core::{B64pix, Config};
//!
//! let pipeline = B64pix::new(Config::default());
//! let err = pipeline.encode_selected(None).unwrap_err();
//! assert_eq!(err.to_string(), "No file selected");
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{B64pixError, ConfigError, PipelineError, PipelineResult, Result, Severity};
pub use pipeline::{DecodedImage, Decoder, Encoder, SizeCheck, Thumbnail, ThumbnailRenderer, Validator};
pub use types::{DecodeReport, EncodeReport};

use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The pipeline facade - composes the four stages over one configuration.
///
/// Holds no mutable state; the shell owns the "currently selected file" and
/// "last thumbnail" and overwrites them wholesale per action.
pub struct B64pix {
    validator: Validator,
    encoder: Encoder,
    decoder: Decoder,
    renderer: ThumbnailRenderer,
}

impl B64pix {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: Config) -> Self {
        tracing::debug!("Initializing b64pix v{}", VERSION);
        Self {
            validator: Validator::new(&config.limits),
            encoder: Encoder,
            decoder: Decoder,
            renderer: ThumbnailRenderer::new(config.thumbnail),
        }
    }

    /// Create a new pipeline with configuration loaded from disk.
    pub fn with_defaults() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::new(config))
    }

    /// Check a file's size against the configured limit.
    pub fn check_size(&self, path: &Path) -> PipelineResult<SizeCheck> {
        self.validator.check(path)
    }

    /// Encode a file as a Base64 payload. No size check; validate first.
    pub fn encode_file(&self, path: &Path) -> PipelineResult<String> {
        self.encoder.encode_file(path)
    }

    /// Encode the current selection, or fail without touching the
    /// filesystem when nothing is selected.
    pub fn encode_selected(&self, selection: Option<&Path>) -> PipelineResult<String> {
        match selection {
            Some(path) => self.encode_file(path),
            None => Err(PipelineError::NoFileSelected),
        }
    }

    /// Decode a Base64 payload and render it as a bounded thumbnail.
    pub fn decode_to_thumbnail(&self, input: &str) -> PipelineResult<(DecodedImage, Thumbnail)> {
        let decoded = self.decoder.decode(input)?;
        let thumbnail = self.renderer.render(&decoded.image)?;
        Ok((decoded, thumbnail))
    }

    /// The file-selection path: validate the file, then render a preview
    /// thumbnail from its contents.
    pub fn preview_file(&self, path: &Path) -> PipelineResult<Thumbnail> {
        self.validator.check(path)?.require_within(path)?;

        let bytes = std::fs::read(path).map_err(|e| PipelineError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let decoded = Decoder::decode_image_bytes(bytes)?;
        self.renderer.render(&decoded.image)
    }
}
