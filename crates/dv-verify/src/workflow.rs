use std::time::Duration;

use dv_config::AnalysisConfig;
use dv_core::{Modality, VerificationResult};

use crate::analyzer::MockAnalyzer;
use crate::error::VerifyError;
use crate::input::AnalysisInput;
use crate::slot::{AnalysisSlot, AnalysisTicket};

/// Simulated processing time per modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub text: Duration,
    pub image: Duration,
}

impl Latency {
    /// No delay at all, for scripted runs.
    pub const NONE: Self = Self {
        text: Duration::ZERO,
        image: Duration::ZERO,
    };

    #[must_use]
    pub const fn for_modality(&self, modality: Modality) -> Duration {
        match modality {
            Modality::Text => self.text,
            Modality::Image => self.image,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            text: Duration::from_millis(2000),
            image: Duration::from_millis(2500),
        }
    }
}

/// Drives slots from `Analyzing` to `Resolved`.
#[derive(Debug, Clone)]
pub struct Workflow {
    analyzer: MockAnalyzer,
    latency: Latency,
}

impl Workflow {
    #[must_use]
    pub const fn new(analyzer: MockAnalyzer, latency: Latency) -> Self {
        Self { analyzer, latency }
    }

    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            MockAnalyzer::new(config.seed),
            Latency {
                text: config.text_delay(),
                image: config.image_delay(),
            },
        )
    }

    #[must_use]
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    /// Wait out the simulated latency and produce the verdict for `ticket`.
    ///
    /// Does not touch the slot, so callers can race it against page teardown.
    /// Dropping the future cancels the delay.
    ///
    /// # Errors
    ///
    /// Returns the input's validation error, if any.
    pub async fn process<I: AnalysisInput>(
        &mut self,
        ticket: &AnalysisTicket<I>,
    ) -> Result<VerificationResult, VerifyError> {
        let delay = self.latency.for_modality(I::MODALITY);
        tracing::debug!(modality = I::MODALITY.as_str(), delay_ms = delay.as_millis(), "processing");
        tokio::time::sleep(delay).await;
        Ok(ticket.input().verdict(&mut self.analyzer)?)
    }

    /// Begin, process, and resolve in one go.
    ///
    /// Returns `Ok(None)` when the slot was already analyzing. A failed verdict
    /// abandons the analysis, leaving the slot `Idle` with its input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the slot's input is missing or invalid.
    pub async fn run<I: AnalysisInput>(
        &mut self,
        slot: &mut AnalysisSlot<I>,
    ) -> Result<Option<VerificationResult>, VerifyError> {
        let Some(ticket) = slot.begin()? else {
            return Ok(None);
        };
        let result = match self.process(&ticket).await {
            Ok(result) => result,
            Err(error) => {
                slot.abandon(ticket);
                return Err(error);
            }
        };
        slot.resolve(ticket, result.clone())?;
        Ok(Some(result))
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new(MockAnalyzer::default(), Latency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use dv_core::PageState;
    use pretty_assertions::assert_eq;

    /// Passes validation but has no verdict to give.
    #[derive(Debug, Clone)]
    struct Unreadable;

    impl AnalysisInput for Unreadable {
        const MODALITY: Modality = Modality::Image;

        fn missing() -> ValidationError {
            ValidationError::NoImage
        }

        fn validate(&self) -> Result<(), ValidationError> {
            Ok(())
        }

        fn verdict(&self, _analyzer: &mut MockAnalyzer) -> Result<VerificationResult, ValidationError> {
            Err(ValidationError::UnsupportedImage)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failed_verdict_returns_slot_to_idle() {
        let mut slot = AnalysisSlot::new();
        slot.submit(Unreadable).expect("submit");

        let err = Workflow::default().run(&mut slot).await.expect_err("verdict fails");

        assert_eq!(err.as_validation(), Some(&ValidationError::UnsupportedImage));
        assert_eq!(slot.state(), PageState::Idle);
        assert!(slot.input().is_some());
        assert!(slot.result().is_none());
    }

    #[test]
    fn from_config_copies_delays() {
        let config = AnalysisConfig {
            text_delay_ms: 5,
            image_delay_ms: 7,
            ..Default::default()
        };
        let workflow = Workflow::from_config(&config);
        assert_eq!(workflow.latency().text, Duration::from_millis(5));
        assert_eq!(workflow.latency().image, Duration::from_millis(7));
    }

    #[test]
    fn default_latency_matches_pages() {
        let latency = Latency::default();
        assert_eq!(latency.for_modality(Modality::Text), Duration::from_millis(2000));
        assert_eq!(latency.for_modality(Modality::Image), Duration::from_millis(2500));
    }
}
