//! Per-page input, pending flag, and result.

use dv_core::{CoreError, PageState, VerificationResult};

use crate::error::VerifyError;
use crate::input::AnalysisInput;

/// Proof that a slot entered `Analyzing` for one specific input.
///
/// Carries a copy of the input so the analysis can run without borrowing
/// the slot.
#[derive(Debug, Clone)]
pub struct AnalysisTicket<I> {
    generation: u64,
    input: I,
}

impl<I> AnalysisTicket<I> {
    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }
}

/// The input, pending flag, and result owned by one analysis page.
///
/// At most one analysis is pending per slot. Replacing or clearing the input
/// bumps the generation so a late result for the old input is dropped.
#[derive(Debug)]
pub struct AnalysisSlot<I> {
    input: Option<I>,
    state: PageState,
    result: Option<VerificationResult>,
    generation: u64,
}

impl<I> Default for AnalysisSlot<I> {
    fn default() -> Self {
        Self {
            input: None,
            state: PageState::Idle,
            result: None,
            generation: 0,
        }
    }
}

impl<I: AnalysisInput> AnalysisSlot<I> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> PageState {
        self.state
    }

    #[must_use]
    pub const fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    #[must_use]
    pub const fn result(&self) -> Option<&VerificationResult> {
        self.result.as_ref()
    }

    /// Whether the analyze trigger is disabled.
    #[must_use]
    pub const fn is_analyzing(&self) -> bool {
        self.state.is_pending()
    }

    /// Load new input. Discards any previous result and returns to `Idle`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the transition table always admits `Idle`
    /// from a non-idle state.
    pub fn submit(&mut self, input: I) -> Result<(), VerifyError> {
        self.reset(Some(input))
    }

    /// Drop input and result, returning to `Idle`.
    ///
    /// # Errors
    ///
    /// See [`Self::submit`].
    pub fn clear(&mut self) -> Result<(), VerifyError> {
        self.reset(None)
    }

    /// Enter `Analyzing` for the current input.
    ///
    /// Returns `Ok(None)` without side effects if an analysis is already
    /// pending. Re-analyzing a resolved slot discards the previous result.
    ///
    /// # Errors
    ///
    /// Returns a validation error, leaving the slot untouched, when there is
    /// no input or the input is invalid.
    pub fn begin(&mut self) -> Result<Option<AnalysisTicket<I>>, VerifyError> {
        if self.state.is_pending() {
            tracing::debug!(modality = I::MODALITY.as_str(), "analysis already pending; ignoring trigger");
            return Ok(None);
        }

        let input = self.input.clone().ok_or_else(I::missing)?;
        input.validate()?;

        if self.state == PageState::Resolved {
            self.transition(PageState::Idle)?;
            self.result = None;
        }
        self.transition(PageState::Analyzing)?;
        tracing::debug!(modality = I::MODALITY.as_str(), generation = self.generation, "analysis started");

        Ok(Some(AnalysisTicket {
            generation: self.generation,
            input,
        }))
    }

    /// Store the result for `ticket`.
    ///
    /// Returns `false` and keeps the slot as is when the ticket is stale
    /// (input replaced or cleared since [`Self::begin`]).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if the slot is not analyzing.
    pub fn resolve(
        &mut self,
        ticket: AnalysisTicket<I>,
        result: VerificationResult,
    ) -> Result<bool, VerifyError> {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "dropping result for replaced input"
            );
            return Ok(false);
        }
        self.transition(PageState::Resolved)?;
        tracing::debug!(
            modality = I::MODALITY.as_str(),
            label = %result.label,
            confidence = result.confidence,
            "analysis resolved"
        );
        self.result = Some(result);
        Ok(true)
    }

    /// Give up on a pending analysis (page teardown, sign-out).
    pub fn abandon(&mut self, ticket: AnalysisTicket<I>) {
        if ticket.generation == self.generation && self.state.is_pending() {
            self.state = PageState::Idle;
            tracing::debug!(modality = I::MODALITY.as_str(), "pending analysis abandoned");
        }
    }

    fn reset(&mut self, input: Option<I>) -> Result<(), VerifyError> {
        if self.state != PageState::Idle {
            self.transition(PageState::Idle)?;
        }
        self.input = input;
        self.result = None;
        self.generation += 1;
        Ok(())
    }

    fn transition(&mut self, next: PageState) -> Result<(), CoreError> {
        if !self.state.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}
