//! Base64 to image decoding with format detection.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

use crate::error::{PipelineError, PipelineResult};

/// Result of decoding a Base64 payload into an image.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Decoded payload size in bytes
    pub byte_len: u64,
}

/// Decodes pasted Base64 strings into images.
pub struct Decoder;

impl Decoder {
    /// Decode a Base64 string and interpret the bytes as a raster image.
    ///
    /// Whitespace is stripped from the whole input first, so payloads
    /// pasted from a multiline field decode even when line-wrapped; a blank
    /// string is `EmptyInput`. Invalid alphabet characters or bad padding
    /// fail as `Base64`, and bytes that are not a decodable image fail as
    /// `ImageFormat`.
    pub fn decode(&self, input: &str) -> PipelineResult<DecodedImage> {
        let cleaned: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if cleaned.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let bytes = BASE64.decode(cleaned.as_bytes())?;
        tracing::debug!("Decoded {} payload bytes", bytes.len());
        Self::decode_image_bytes(bytes)
    }

    /// Interpret raw bytes as an image, sniffing the format from content.
    pub fn decode_image_bytes(bytes: Vec<u8>) -> PipelineResult<DecodedImage> {
        let byte_len = bytes.len() as u64;
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::ImageFormat {
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = reader.format().ok_or_else(|| PipelineError::ImageFormat {
            message: "Unrecognized image format".to_string(),
        })?;
        let image = reader.decode().map_err(|e| PipelineError::ImageFormat {
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            byte_len,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        ImageFormat::Ico => "ico".to_string(),
        _ => "unknown".to_string(),
    }
}
