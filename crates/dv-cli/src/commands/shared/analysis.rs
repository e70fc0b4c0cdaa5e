use anyhow::bail;
use dv_auth::{AuthError, SessionGate};
use dv_core::{Label, Modality, VerificationResult};
use dv_verify::{AnalysisInput, AnalysisSlot, VerifyError, Workflow};
use serde::Serialize;

use crate::progress::Progress;

enum Outcome {
    Finished(Result<VerificationResult, VerifyError>),
    SignedOut(AuthError),
}

/// Run the pending analysis for `slot` while the page holds `gate`.
///
/// A sign-out pushed during the simulated delay abandons the analysis and
/// surfaces the redirect instead of a verdict.
pub async fn analyze<I: AnalysisInput>(
    workflow: &mut Workflow,
    slot: &mut AnalysisSlot<I>,
    gate: &mut SessionGate,
    message: &str,
) -> anyhow::Result<VerificationResult> {
    let Some(ticket) = slot.begin()? else {
        bail!("an analysis is already in progress");
    };

    let progress = Progress::spinner(message);
    let outcome = tokio::select! {
        result = workflow.process(&ticket) => Outcome::Finished(result),
        signed_out = gate.wait_signed_out() => Outcome::SignedOut(signed_out),
    };

    match outcome {
        Outcome::Finished(Ok(result)) => {
            progress.finish_clear();
            if !slot.resolve(ticket, result.clone())? {
                bail!("analysis result discarded: input changed while processing");
            }
            Ok(result)
        }
        Outcome::Finished(Err(error)) => {
            progress.finish_err("Analysis failed");
            slot.abandon(ticket);
            Err(error.into())
        }
        Outcome::SignedOut(error) => {
            progress.finish_err("Signed out");
            tracing::warn!(route = %gate.route(), "session ended during analysis");
            slot.abandon(ticket);
            Err(error.into())
        }
    }
}

/// Result card printed by the analysis pages.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse<D: Serialize> {
    pub page: &'static str,
    pub user: String,
    pub headline: &'static str,
    pub label: Label,
    pub confidence: f64,
    pub confidence_display: String,
    pub details: String,
    pub modality: Modality,
    #[serde(flatten)]
    pub input: D,
    pub back: Option<&'static str>,
}

impl<D: Serialize> AnalysisResponse<D> {
    pub fn new(gate: &SessionGate, result: VerificationResult, input: D) -> Self {
        let route = gate.route();
        Self {
            page: route.path(),
            user: gate.identity().display_name().to_string(),
            headline: result.headline(),
            label: result.label,
            confidence: result.confidence,
            confidence_display: result.confidence_display(),
            details: result.details,
            modality: result.modality,
            input,
            back: route.back().map(dv_core::Route::path),
        }
    }
}
