//! Composition driver: turns a photo, a quotation and a design directive into the
//! finished story PNG.
//!
//! # Pipeline
//! 1. [`plan_story`] wraps the quote to the photo's width, measures every block and
//!    asks [`solve_layout`] where each block goes. Pure; no pixels are touched.
//! 2. [`render_story`] paints the plan onto a fresh canvas.
//! 3. [`compose_story`] runs both and encodes the canvas as PNG.
//!
//! Everything here is CPU-bound and synchronous. The async handler runs it inside
//! `tokio::task::spawn_blocking`.

use std::io::Cursor;

use image::{imageops, DynamicImage, ImageOutputFormat, RgbaImage};
use tracing::{debug, info};

use crate::layout::{
    solve_layout, wrap_text, LayoutRequest, LayoutResult, TextMeasure, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
use crate::models::quote::Quotation;
use crate::story::design::DesignDirective;
use crate::story::typeface::{FaceSource, TextRenderer};
use crate::story::ComposeError;

/// Download name of the composed story.
pub const STORY_FILENAME: &str = "ai_designed_story.png";

/// One text line with its final top-left position on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Where every element of the story goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPlan {
    pub photo_x: i32,
    pub layout: LayoutResult,
    pub quote_lines: Vec<PlacedLine>,
    pub source_line: PlacedLine,
}

/// Horizontal offset that centers `width` on the story canvas (floor division).
fn centered_x(width: i32) -> i32 {
    (CANVAS_WIDTH - width).div_euclid(2)
}

/// Lays out the story without drawing anything.
pub fn plan_story<Q, S>(
    photo_width: u32,
    photo_height: u32,
    quotation: &Quotation,
    directive: &DesignDirective,
    quote_face: &Q,
    source_face: &S,
) -> Result<StoryPlan, ComposeError>
where
    Q: TextMeasure + ?Sized,
    S: TextMeasure + ?Sized,
{
    let photo_width = photo_width as i32;
    let photo_height = photo_height as i32;
    let line_spacing = directive.line_spacing_px();

    let lines = wrap_text(&quotation.text, quote_face, photo_width)?;
    let extents: Vec<_> = lines.iter().map(|line| quote_face.measure(line)).collect();
    debug!("Quote wrapped into {} line(s) at width {}", lines.len(), photo_width);

    let quote_height = if extents.is_empty() {
        0
    } else {
        extents.iter().map(|e| e.height).sum::<i32>() + line_spacing * (extents.len() as i32 - 1)
    };

    let attribution = quotation.attribution();
    let source_extent = source_face.measure(&attribution);

    info!(
        "Block heights: photo={}, quote={}, source={}",
        photo_height, quote_height, source_extent.height
    );

    let layout = solve_layout(&LayoutRequest::new(
        photo_height,
        quote_height,
        source_extent.height,
    ))?;

    info!(
        "Block positions: photo_y={}, quote_y={}, source_y={} (spacing {}, compact {})",
        layout.image_y, layout.quote_y, layout.source_y, layout.spacing, layout.compact
    );

    let mut cursor = layout.quote_y;
    let quote_lines = lines
        .into_iter()
        .zip(&extents)
        .map(|(text, extent)| {
            let placed = PlacedLine {
                text,
                x: centered_x(extent.width),
                y: cursor,
            };
            cursor += extent.height + line_spacing;
            placed
        })
        .collect();

    Ok(StoryPlan {
        photo_x: centered_x(photo_width),
        layout,
        quote_lines,
        source_line: PlacedLine {
            text: attribution,
            x: centered_x(source_extent.width),
            y: layout.source_y,
        },
    })
}

/// Paints a planned story onto a new 1080x1920 canvas.
pub fn render_story(
    photo: &RgbaImage,
    plan: &StoryPlan,
    directive: &DesignDirective,
    quote_face: &dyn TextRenderer,
    source_face: &dyn TextRenderer,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        CANVAS_WIDTH as u32,
        CANVAS_HEIGHT as u32,
        directive.background(),
    );

    imageops::overlay(
        &mut canvas,
        photo,
        plan.photo_x as i64,
        plan.layout.image_y as i64,
    );

    let color = directive.text_color.rgba();
    for line in &plan.quote_lines {
        quote_face.draw(&mut canvas, line.x, line.y, color, &line.text);
    }
    let source = &plan.source_line;
    source_face.draw(&mut canvas, source.x, source.y, color, &source.text);

    canvas
}

/// Builds the story image and returns it PNG-encoded.
pub fn compose_story(
    photo: &RgbaImage,
    quotation: &Quotation,
    directive: &DesignDirective,
    faces: &dyn FaceSource,
) -> Result<Vec<u8>, ComposeError> {
    let quote_face = faces.face(directive.quote_size);
    let source_face = faces.face(directive.source_size);

    let plan = plan_story(
        photo.width(),
        photo.height(),
        quotation,
        directive,
        quote_face.as_ref(),
        source_face.as_ref(),
    )?;
    let canvas = render_story(photo, &plan, directive, quote_face.as_ref(), source_face.as_ref());

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .to_rgb8()
        .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
        .map_err(ComposeError::Encode)?;

    info!("Story image composed ({} bytes)", png.len());
    Ok(png)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
