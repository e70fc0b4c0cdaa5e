use dv_core::{Label, Modality, VerificationResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ValidationError;
use crate::image::ImagePayload;

/// Probability that an image draw comes out `FAKE`.
pub const IMAGE_FAKE_PROBABILITY: f64 = 0.4;

const FAKE_MARKERS: [&str; 2] = ["fake", "false"];

/// Literal keyword check: `FAKE` iff the lowercased text contains a marker.
#[must_use]
pub fn classify_text(text: &str) -> Label {
    let lower = text.to_lowercase();
    if FAKE_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Label::Fake
    } else {
        Label::True
    }
}

/// Produces synthetic verdicts from a seedable RNG.
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    rng: ChaCha8Rng,
}

impl MockAnalyzer {
    /// Seeded analyzer when `seed` is set, OS entropy otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self { rng }
    }

    /// Classify a text submission.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` when `text` has no non-whitespace
    /// character.
    pub fn analyze_text(&mut self, text: &str) -> Result<VerificationResult, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let label = classify_text(text);
        let confidence = self.confidence(Modality::Text);
        Ok(VerificationResult::new(Modality::Text, label, confidence))
    }

    /// Classify an image. The verdict does not depend on the pixels.
    pub fn analyze_image(&mut self, image: &ImagePayload) -> VerificationResult {
        let label = if self.rng.gen_bool(IMAGE_FAKE_PROBABILITY) {
            Label::Fake
        } else {
            Label::True
        };
        let confidence = self.confidence(Modality::Image);
        tracing::trace!(bytes = image.size(), %label, "image verdict drawn");
        VerificationResult::new(Modality::Image, label, confidence)
    }

    /// Uniform draw in `(floor, 100]`.
    fn confidence(&mut self, modality: Modality) -> f64 {
        let floor = modality.confidence_floor();
        let span = 100.0 - floor;
        loop {
            let unit: f64 = self.rng.r#gen();
            let value = 100.0 - unit * span;
            // Rounding can land exactly on the floor for `unit` close to 1.
            if value > floor {
                return value;
            }
        }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new(None)
    }
}
