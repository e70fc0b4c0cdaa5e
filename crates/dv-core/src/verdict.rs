use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Label, Modality};

pub const TEXT_FAKE_DETAILS: &str = "This news article contains multiple indicators of misinformation. Cross-referencing with verified sources shows inconsistencies.";
pub const TEXT_TRUE_DETAILS: &str = "This news article appears authentic based on language patterns and cross-referencing with verified databases.";
pub const IMAGE_FAKE_DETAILS: &str = "Image analysis detected potential manipulation. EXIF data inconsistencies and pixel-level artifacts suggest possible editing.";
pub const IMAGE_TRUE_DETAILS: &str = "Image appears authentic. Metadata is consistent, no signs of manipulation detected in the analyzed regions.";

/// Synthetic verdict produced by one analysis run.
///
/// Held only in a page slot and discarded when the input changes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VerificationResult {
    pub label: Label,
    /// Synthetic score in `(floor, 100]`, see [`Modality::confidence_floor`].
    pub confidence: f64,
    pub details: String,
    pub modality: Modality,
}

impl VerificationResult {
    /// Build a result, picking the fixed explanation for `modality` and `label`.
    #[must_use]
    pub fn new(modality: Modality, label: Label, confidence: f64) -> Self {
        Self {
            label,
            confidence,
            details: details_for(modality, label).to_string(),
            modality,
        }
    }

    /// Result card title.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match (self.modality, self.label) {
            (_, Label::True) => "Likely Authentic",
            (Modality::Text, Label::Fake) => "Potentially Fake",
            (Modality::Image, Label::Fake) => "Potentially Manipulated",
        }
    }

    /// Confidence with one decimal, e.g. `"87.3%"`.
    #[must_use]
    pub fn confidence_display(&self) -> String {
        format!("{:.1}%", self.confidence)
    }
}

/// The explanation string for a modality/label pair.
#[must_use]
pub const fn details_for(modality: Modality, label: Label) -> &'static str {
    match (modality, label) {
        (Modality::Text, Label::Fake) => TEXT_FAKE_DETAILS,
        (Modality::Text, Label::True) => TEXT_TRUE_DETAILS,
        (Modality::Image, Label::Fake) => IMAGE_FAKE_DETAILS,
        (Modality::Image, Label::True) => IMAGE_TRUE_DETAILS,
    }
}
