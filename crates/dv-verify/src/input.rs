use dv_core::{Modality, VerificationResult};

use crate::analyzer::MockAnalyzer;
use crate::error::ValidationError;
use crate::image::ImagePayload;

/// Something a page can hold in its slot and hand to the analyzer.
pub trait AnalysisInput: Clone {
    const MODALITY: Modality;

    /// Error reported when analyze is triggered with nothing loaded.
    fn missing() -> ValidationError;

    /// Checks that must pass before the slot enters `Analyzing`.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` to surface to the user.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Produce the verdict.
    ///
    /// # Errors
    ///
    /// Returns the same `ValidationError` as [`AnalysisInput::validate`].
    fn verdict(&self, analyzer: &mut MockAnalyzer) -> Result<VerificationResult, ValidationError>;
}

/// Text typed or pasted into the Text Analysis page, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput(String);

impl TextInput {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AnalysisInput for TextInput {
    const MODALITY: Modality = Modality::Text;

    fn missing() -> ValidationError {
        ValidationError::EmptyText
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.0.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(())
    }

    fn verdict(&self, analyzer: &mut MockAnalyzer) -> Result<VerificationResult, ValidationError> {
        analyzer.analyze_text(&self.0)
    }
}

impl AnalysisInput for ImagePayload {
    const MODALITY: Modality = Modality::Image;

    fn missing() -> ValidationError {
        ValidationError::NoImage
    }

    /// Size and format were enforced when the payload was accepted.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn verdict(&self, analyzer: &mut MockAnalyzer) -> Result<VerificationResult, ValidationError> {
        Ok(analyzer.analyze_image(self))
    }
}
