//! Uploaded photo decoding and thumbnailing for the story canvas.

use image::{imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};
use tracing::debug;

use crate::story::ComposeError;

/// Longest side, in pixels, the user photo may occupy on the story canvas.
pub const MAX_PHOTO_SIDE: u32 = 900;

/// Decodes the uploaded photo and shrinks it to fit inside `MAX_PHOTO_SIDE` square.
///
/// Smaller photos are left at their original size; aspect ratio is always kept.
pub fn prepare_photo(bytes: &[u8]) -> Result<RgbaImage, ComposeError> {
    let decoded = image::load_from_memory(bytes).map_err(ComposeError::Photo)?;
    let (width, height) = decoded.dimensions();

    let fitted = fit_within(decoded, MAX_PHOTO_SIDE);
    debug!(
        "Photo prepared: {}x{} -> {}x{}",
        width,
        height,
        fitted.width(),
        fitted.height()
    );

    Ok(fitted.to_rgba8())
}

fn fit_within(image: DynamicImage, max_side: u32) -> DynamicImage {
    if image.width() > max_side || image.height() > max_side {
        image.resize(max_side, max_side, FilterType::Lanczos3)
    } else {
        image
    }
}

/// Best-effort MIME type for an upload whose part carried no usable content type.
pub fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|format| format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_small_photo_keeps_size() {
        let photo = prepare_photo(&png_bytes(640, 480)).unwrap();
        assert_eq!(photo.dimensions(), (640, 480));
    }

    #[test]
    fn test_landscape_photo_fits_width() {
        let photo = prepare_photo(&png_bytes(1800, 1200)).unwrap();
        assert_eq!(photo.dimensions(), (900, 600));
    }

    #[test]
    fn test_portrait_photo_fits_height() {
        let photo = prepare_photo(&png_bytes(1000, 2000)).unwrap();
        assert_eq!(photo.dimensions(), (450, 900));
    }

    #[test]
    fn test_garbage_bytes_are_photo_error() {
        let err = prepare_photo(b"not an image").unwrap_err();
        assert!(matches!(err, ComposeError::Photo(_)));
    }

    #[test]
    fn test_sniff_mime_type_png() {
        assert_eq!(sniff_mime_type(&png_bytes(1, 1)), Some("image/png"));
        assert_eq!(sniff_mime_type(b"plain text"), None);
    }
}
