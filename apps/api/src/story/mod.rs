// Story image composition.
// Takes a curated passage plus the user's photo and produces the finished 1080x1920 PNG.
// The vision model only picks colours and sizes (design.rs); placement is computed by
// crate::layout and drawn here.

pub mod composer;
pub mod design;
pub mod handlers;
pub mod photo;
pub mod prompts;
pub mod typeface;

use thiserror::Error;

use crate::layout::LayoutError;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Photo could not be decoded: {0}")]
    Photo(#[source] image::ImageError),

    #[error("Story image could not be encoded: {0}")]
    Encode(#[source] image::ImageError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[cfg(test)]
pub(crate) mod testing {
    use image::{Rgba, RgbaImage};

    use crate::layout::{TextExtent, TextMeasure};
    use crate::story::typeface::{blend_pixel, FaceSource, TextRenderer};

    /// Fixed-pitch stand-in for a real font: every character of the trimmed string is `advance`
    /// pixels wide and `height` pixels tall, drawn as a solid block.
    #[derive(Debug, Clone, Copy)]
    pub struct BlockFace {
        pub advance: i32,
        pub height: i32,
    }

    impl BlockFace {
        pub fn new(advance: i32, height: i32) -> Self {
            Self { advance, height }
        }
    }

    impl TextMeasure for BlockFace {
        fn measure(&self, text: &str) -> TextExtent {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return TextExtent::default();
            }
            TextExtent::new(trimmed.chars().count() as i32 * self.advance, self.height)
        }
    }

    impl TextRenderer for BlockFace {
        fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
            let extent = self.measure(text);
            for py in y..y + extent.height {
                for px in x..x + extent.width {
                    blend_pixel(canvas, px, py, color, 1.0);
                }
            }
        }
    }

    /// Hands out `BlockFace`s whose advance and height follow the requested size.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BlockFaces;

    impl BlockFaces {
        pub fn at(px: f32) -> BlockFace {
            let size = px.round() as i32;
            BlockFace::new(size / 2, size)
        }
    }

    impl FaceSource for BlockFaces {
        fn face(&self, px: f32) -> Box<dyn TextRenderer> {
            Box::new(Self::at(px))
        }
    }
}
