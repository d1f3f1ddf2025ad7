//! Vertical layout solver: stacks photo, quote and attribution on the story canvas.
//!
//! # Placement rules
//! - Normal mode: the leftover height is split into four equal gutters (above the
//!   photo, photo→quote, quote→source, below the source), floor division.
//! - Compact mode: when the blocks are taller than the space between the margins the
//!   gutter drops to a fixed floor and overlap with the margins is accepted.
//! - Overflow correction shifts the whole stack up until the source block clears the
//!   bottom margin; the top-margin clamp then pins the photo back to the top margin,
//!   which may push the stack past the bottom again. That is accepted.

use crate::layout::LayoutError;

/// Story canvas width in pixels.
pub const CANVAS_WIDTH: i32 = 1080;
/// Story canvas height in pixels.
pub const CANVAS_HEIGHT: i32 = 1920;
/// Blank band kept above the first block and below the last one.
pub const MARGIN: i32 = 100;
/// Gutter used when the blocks do not fit between the margins.
pub const MIN_SPACING: i32 = 50;

/// Heights of the three stacked blocks plus the canvas parameters they are placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRequest {
    pub image_height: i32,
    pub quote_height: i32,
    pub source_height: i32,
    pub canvas_height: i32,
    pub margin: i32,
    pub min_spacing: i32,
}

impl LayoutRequest {
    /// A request on the standard 1080×1920 story canvas.
    pub fn new(image_height: i32, quote_height: i32, source_height: i32) -> Self {
        Self {
            image_height,
            quote_height,
            source_height,
            canvas_height: CANVAS_HEIGHT,
            margin: MARGIN,
            min_spacing: MIN_SPACING,
        }
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let heights = [
            ("image", self.image_height),
            ("quote", self.quote_height),
            ("source", self.source_height),
        ];
        for (block, height) in heights {
            if height < 0 {
                return Err(LayoutError::InvalidArgument(format!(
                    "{block} block height must be non-negative, got {height}"
                )));
            }
        }
        if self.canvas_height <= 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas height must be positive, got {}",
                self.canvas_height
            )));
        }
        if self.margin < 0 || self.min_spacing < 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "margin ({}) and spacing floor ({}) must be non-negative",
                self.margin, self.min_spacing
            )));
        }
        Ok(())
    }
}

/// Top edge of each block, plus the gutter the solver settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutResult {
    pub image_y: i32,
    pub quote_y: i32,
    pub source_y: i32,
    pub spacing: i32,
    /// True when the blocks exceeded the available height and the fixed gutter was used.
    pub compact: bool,
}

/// Computes the top Y coordinate of the photo, quote and source blocks.
pub fn solve_layout(request: &LayoutRequest) -> Result<LayoutResult, LayoutError> {
    request.validate()?;

    let LayoutRequest {
        image_height,
        quote_height,
        source_height,
        canvas_height,
        margin,
        min_spacing,
    } = *request;

    // Widened so block heights near i32::MAX cannot overflow mid-computation.
    let (image_h, quote_h, source_h) = (
        i64::from(image_height),
        i64::from(quote_height),
        i64::from(source_height),
    );
    let (canvas_h, margin) = (i64::from(canvas_height), i64::from(margin));

    let available = canvas_h - 2 * margin;
    let total = image_h + quote_h + source_h;

    let compact = total > available;
    let spacing = if compact {
        i64::from(min_spacing)
    } else {
        (available - total).div_euclid(4)
    };

    let stack_from = |image_y: i64| {
        let quote_y = image_y + image_h + spacing;
        let source_y = quote_y + quote_h + spacing;
        (image_y, quote_y, source_y)
    };

    let (mut image_y, mut quote_y, mut source_y) = stack_from(margin + spacing);

    let bottom_limit = canvas_h - margin;
    let source_bottom = source_y + source_h;
    if source_bottom > bottom_limit {
        let excess = source_bottom - bottom_limit;
        image_y -= excess;
        quote_y -= excess;
        source_y -= excess;
    }

    if image_y < margin {
        (image_y, quote_y, source_y) = stack_from(margin);
    }

    let narrow = |value: i64| {
        i32::try_from(value).map_err(|_| {
            LayoutError::InvalidArgument(format!(
                "block position {value} is outside the coordinate range"
            ))
        })
    };
    let (image_y, quote_y, source_y, spacing) = (
        narrow(image_y)?,
        narrow(quote_y)?,
        narrow(source_y)?,
        narrow(spacing)?,
    );

    Ok(LayoutResult {
        image_y,
        quote_y,
        source_y,
        spacing,
        compact,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
