use serde::{Deserialize, Serialize};

/// Where a recommended passage comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSource {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

/// A literary passage picked by the curator for an uploaded photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecommendation {
    pub quote: String,
    pub source: QuoteSource,
    /// Why the passage matches the photo.
    #[serde(default)]
    pub commentary: String,
}

/// The quotation typeset onto a story image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quotation {
    pub text: String,
    pub author: String,
    pub title: String,
}

impl Quotation {
    /// `author, 「title」`, as quoted in the design prompt.
    pub fn citation(&self) -> String {
        format!("{}, 「{}」", self.author, self.title)
    }

    /// The attribution line drawn under the quote.
    pub fn attribution(&self) -> String {
        format!("– {}", self.citation())
    }
}
