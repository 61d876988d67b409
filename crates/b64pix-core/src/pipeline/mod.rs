//! Base64 image pipeline stages.
//!
//! This module contains the four stages the shell composes:
//! - **validate**: file size check against the configured limit
//! - **encode**: file bytes to standard Base64
//! - **decode**: Base64 string to a decoded image
//! - **thumbnail**: bounded PNG thumbnail for the display surface

pub mod decode;
pub mod encode;
pub mod thumbnail;
pub mod validate;

// Re-exports for convenient access
pub use decode::{format_to_string, DecodedImage, Decoder};
pub use encode::Encoder;
pub use thumbnail::{Thumbnail, ThumbnailRenderer};
pub use validate::{SizeCheck, Validator};
