//! Text measurement seam between the layout engine and the glyph rasterizer.
//!
//! The layout engine never touches fonts directly. It only asks "how big is this
//! string?" through [`TextMeasure`], which lets the wrapper and solver be tested
//! with plain closures.

/// Pixel bounding box of a rendered string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

impl TextExtent {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Reports the rendered size of a string for one fixed font and size.
///
/// Implementations must be pure: measuring the same string twice returns the same
/// extent, and measuring never mutates shared state.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> TextExtent;

    fn width_of(&self, text: &str) -> i32 {
        self.measure(text).width
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> TextExtent,
{
    fn measure(&self, text: &str) -> TextExtent {
        self(text)
    }
}
