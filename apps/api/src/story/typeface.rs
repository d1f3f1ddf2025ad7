//! TrueType text measurement and drawing for story images.
//!
//! Text is measured and placed by its *ink box*: the union of the glyphs' pixel
//! bounding boxes. Whitespace therefore has no width of its own, and drawing at
//! `(x, y)` puts the top-left corner of the visible ink exactly on that point.

use std::path::Path;
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Rect, Scale};
use thiserror::Error;

use crate::layout::{TextExtent, TextMeasure};

#[derive(Debug, Error)]
pub enum FontError {
    #[error("Font file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font data is not a valid TrueType/OpenType font")]
    Parse,
}

/// Something that can both measure and paint a string in one font at one size.
pub trait TextRenderer: TextMeasure + Send + Sync {
    /// Draws `text` so that its ink box's top-left corner lands on `(x, y)`.
    /// Pixels outside the canvas are skipped.
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str);
}

/// Hands out renderers for a requested pixel size.
pub trait FaceSource: Send + Sync {
    fn face(&self, px: f32) -> Box<dyn TextRenderer>;
}

/// A parsed font, shared between requests.
#[derive(Clone)]
pub struct Typeface {
    font: Arc<Font<'static>>,
}

impl Typeface {
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FontError> {
        let font = Font::try_from_vec(bytes).ok_or(FontError::Parse)?;
        Ok(Self {
            font: Arc::new(font),
        })
    }

    pub fn at_size(&self, px: f32) -> ScaledFace {
        ScaledFace {
            font: Arc::clone(&self.font),
            scale: Scale::uniform(px),
        }
    }
}

impl FaceSource for Typeface {
    fn face(&self, px: f32) -> Box<dyn TextRenderer> {
        Box::new(self.at_size(px))
    }
}

/// A [`Typeface`] fixed at one pixel size.
pub struct ScaledFace {
    font: Arc<Font<'static>>,
    scale: Scale,
}

impl ScaledFace {
    /// Lays the string out on a baseline one ascent below y = 0.
    fn layout(&self, text: &str) -> Vec<PositionedGlyph<'_>> {
        let v_metrics = self.font.v_metrics(self.scale);
        self.font
            .layout(text, self.scale, point(0.0, v_metrics.ascent))
            .collect()
    }
}

/// Union of the glyphs' pixel boxes; `None` when nothing is inked.
fn ink_box(glyphs: &[PositionedGlyph<'_>]) -> Option<Rect<i32>> {
    glyphs
        .iter()
        .filter_map(PositionedGlyph::pixel_bounding_box)
        .reduce(|acc, bb| Rect {
            min: point(acc.min.x.min(bb.min.x), acc.min.y.min(bb.min.y)),
            max: point(acc.max.x.max(bb.max.x), acc.max.y.max(bb.max.y)),
        })
}

impl TextMeasure for ScaledFace {
    fn measure(&self, text: &str) -> TextExtent {
        match ink_box(&self.layout(text)) {
            Some(bb) => TextExtent::new(bb.width(), bb.height()),
            None => TextExtent::default(),
        }
    }
}

impl TextRenderer for ScaledFace {
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
        let glyphs = self.layout(text);
        let Some(ink) = ink_box(&glyphs) else {
            return;
        };
        let dx = x - ink.min.x;
        let dy = y - ink.min.y;

        for glyph in &glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x + dx;
                let py = gy as i32 + bb.min.y + dy;
                blend_pixel(canvas, px, py, color, coverage);
            });
        }
    }
}

/// Alpha-blends `color` at `coverage` (0.0–1.0) over the canvas pixel.
pub(crate) fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }

    let dst = canvas.get_pixel_mut(x, y);
    let inv = 1.0 - alpha;
    for channel in 0..3 {
        dst.0[channel] = (color.0[channel] as f32 * alpha + dst.0[channel] as f32 * inv).round() as u8;
    }
    dst.0[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Typeface::load(Path::new("/nonexistent/font.ttf")).err().unwrap();
        assert!(matches!(err, FontError::Io(_)));
    }

    #[test]
    fn test_load_garbage_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a font").unwrap();
        let err = Typeface::load(file.path()).err().unwrap();
        assert!(matches!(err, FontError::Parse));
    }

    #[test]
    fn test_blend_full_coverage_replaces_colour() {
        let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        blend_pixel(&mut canvas, 1, 1, Rgba([255, 255, 255, 255]), 1.0);
        assert_eq!(canvas.get_pixel(1, 1), &Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_blend_half_coverage_mixes() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        blend_pixel(&mut canvas, 0, 0, Rgba([200, 100, 50, 255]), 0.5);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([100, 50, 25, 255]));
    }

    #[test]
    fn test_blend_outside_canvas_is_ignored() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([7, 7, 7, 255]));
        blend_pixel(&mut canvas, -1, 0, Rgba([255, 0, 0, 255]), 1.0);
        blend_pixel(&mut canvas, 0, 5, Rgba([255, 0, 0, 255]), 1.0);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([7, 7, 7, 255]));
    }
}
