// Story layout engine: line wrapping and vertical block placement.
// Pure and synchronous. Callers on the async path run it inside tokio::task::spawn_blocking
// together with the rest of the composition.

pub mod measure;
pub mod vertical;
pub mod wrap;

use thiserror::Error;

pub use measure::{TextExtent, TextMeasure};
pub use vertical::{solve_layout, LayoutRequest, LayoutResult, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use wrap::wrap_text;

/// Caller contract violations. Overflow and compaction are never errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid layout argument: {0}")]
    InvalidArgument(String),
}
