//! Design director: asks the vision model for colours and type sizes.
//!
//! A reply that does not contain a usable directive is not an error: the story is
//! composed with [`DesignDirective::default`] instead. Only a failed model call is.

use image::Rgba;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{parse_json_reply, ImagePart, VisionModel};
use crate::models::quote::Quotation;
use crate::story::prompts::DESIGN_PROMPT_TEMPLATE;

const DESIGN_TEMPERATURE: f32 = 0.7;

const QUOTE_SIZE_RANGE: (f32, f32) = (40.0, 80.0);
const SOURCE_SIZE_RANGE: (f32, f32) = (30.0, 50.0);
const LINE_SPACING_RANGE: (f32, f32) = (15.0, 35.0);

/// Text colour on the story. Anything other than `"white"` reads as black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    White,
    Black,
}

impl<'de> Deserialize<'de> for TextColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "white" {
            TextColor::White
        } else {
            TextColor::Black
        })
    }
}

impl TextColor {
    pub fn rgba(self) -> Rgba<u8> {
        match self {
            TextColor::White => Rgba([255, 255, 255, 255]),
            TextColor::Black => Rgba([0, 0, 0, 255]),
        }
    }
}

/// Visual parameters for one story image. Missing fields fall back individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignDirective {
    pub background_color: [u8; 3],
    pub text_color: TextColor,
    /// Quote font size in pixels.
    pub quote_size: f32,
    /// Attribution font size in pixels.
    pub source_size: f32,
    /// Vertical gap between quote lines in pixels.
    pub line_spacing: f32,
}

impl Default for DesignDirective {
    fn default() -> Self {
        Self {
            background_color: [25, 25, 25],
            text_color: TextColor::White,
            quote_size: 60.0,
            source_size: 40.0,
            line_spacing: 25.0,
        }
    }
}

impl DesignDirective {
    /// Clamps sizes into the ranges the prompt allows. Non-finite values take the default.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            quote_size: clamp_or(self.quote_size, QUOTE_SIZE_RANGE, defaults.quote_size),
            source_size: clamp_or(self.source_size, SOURCE_SIZE_RANGE, defaults.source_size),
            line_spacing: clamp_or(self.line_spacing, LINE_SPACING_RANGE, defaults.line_spacing),
            ..self
        }
    }

    pub fn background(&self) -> Rgba<u8> {
        let [r, g, b] = self.background_color;
        Rgba([r, g, b, 255])
    }

    pub fn line_spacing_px(&self) -> i32 {
        self.line_spacing.round() as i32
    }
}

fn clamp_or(value: f32, (min, max): (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

pub(crate) fn build_design_prompt(quotation: &Quotation) -> String {
    let quote_chars = quotation.text.chars().count().to_string();
    let citation = quotation.citation();
    let prompt = fill_template(
        DESIGN_PROMPT_TEMPLATE,
        &[
            ("quote", quotation.text.as_str()),
            ("quote_chars", quote_chars.as_str()),
            ("citation", citation.as_str()),
        ],
    );
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

/// Asks the vision model to design the story for this photo and quotation.
///
/// Falls back to the default directive when the reply holds no valid JSON.
pub async fn request_design(
    model: &dyn VisionModel,
    image: &ImagePart,
    quotation: &Quotation,
) -> Result<DesignDirective, AppError> {
    let prompt = build_design_prompt(quotation);

    let reply = model
        .generate(&prompt, image, DESIGN_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Design request failed: {e}")))?;

    match parse_json_reply::<DesignDirective>(&reply) {
        Ok(directive) => {
            let directive = directive.normalized();
            info!(?directive, "Design directive received");
            Ok(directive)
        }
        Err(e) => {
            warn!(error = %e, reply = %reply, "Design reply unusable, using default design");
            Ok(DesignDirective::default())
        }
    }
}
