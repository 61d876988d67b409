//! Thumbnail rendering with PNG output for the display surface.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

use crate::config::ThumbnailConfig;
use crate::error::{PipelineError, PipelineResult};

/// A rendered thumbnail, held as PNG bytes.
#[derive(Debug)]
pub struct Thumbnail {
    /// Thumbnail width in pixels
    pub width: u32,
    /// Thumbnail height in pixels
    pub height: u32,
    png: Vec<u8>,
}

impl Thumbnail {
    /// The PNG bytes, for writing to disk.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Base64-encoded PNG for an image widget's data source.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.png)
    }
}

/// Renders bounded thumbnails from decoded images.
pub struct ThumbnailRenderer {
    config: ThumbnailConfig,
}

impl ThumbnailRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: ThumbnailConfig) -> Self {
        Self { config }
    }

    /// Render a copy scaled to fit within max_edge × max_edge.
    ///
    /// Aspect ratio is preserved and images already within bounds are kept
    /// at their original dimensions. The result is re-encoded as PNG, so a
    /// decode → thumbnail round trip does not reproduce the original bytes.
    pub fn render(&self, image: &DynamicImage) -> PipelineResult<Thumbnail> {
        let max = self.config.max_edge;
        let (width, height) = image.dimensions();

        let scaled = if width <= max && height <= max {
            image.clone()
        } else {
            image.thumbnail(max, max)
        };
        let (width, height) = scaled.dimensions();

        let mut buffer = Cursor::new(Vec::new());
        scaled
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| PipelineError::ImageFormat {
                message: format!("PNG encoding failed: {}", e),
            })?;

        Ok(Thumbnail {
            width,
            height,
            png: buffer.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ThumbnailRenderer {
        ThumbnailRenderer::new(ThumbnailConfig::default())
    }

    #[test]
    fn test_downscales_to_fit_box() {
        let img = DynamicImage::new_rgb8(1000, 500);
        let thumb = renderer().render(&img).unwrap();
        assert!(thumb.width <= 200 && thumb.height <= 200);
        // Aspect ratio 2:1 survives the fit
        assert_eq!((thumb.width, thumb.height), (200, 100));
    }

    #[test]
    fn test_never_upscales() {
        let img = DynamicImage::new_rgb8(120, 80);
        let thumb = renderer().render(&img).unwrap();
        assert_eq!((thumb.width, thumb.height), (120, 80));
    }

    #[test]
    fn test_tall_image_bounded_by_height() {
        let img = DynamicImage::new_rgb8(300, 900);
        let thumb = renderer().render(&img).unwrap();
        assert_eq!(thumb.height, 200);
        assert!(thumb.width <= 200);
    }

    #[test]
    fn test_output_is_png() {
        let img = DynamicImage::new_rgb8(400, 400);
        let thumb = renderer().render(&img).unwrap();
        // PNG signature
        assert_eq!(&thumb.png_bytes()[0..4], b"\x89PNG");
    }

    #[test]
    fn test_base64_output_is_ascii() {
        let img = DynamicImage::new_rgb8(400, 300);
        let thumb = renderer().render(&img).unwrap();
        let encoded = thumb.to_base64();
        assert!(!encoded.is_empty());
        assert!(encoded.is_ascii());
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let img = DynamicImage::new_rgb8(640, 480);
        let r = renderer();
        let a = r.render(&img).unwrap();
        let b = r.render(&img).unwrap();
        assert_eq!(a.png_bytes(), b.png_bytes());
    }
}
