//! Cross-cutting error types for DeepVerify.
//!
//! Domain-specific errors (`AuthError`, `VerifyError`, `ConfigError`) live in
//! their respective crates and converge in `dv-cli` through `anyhow`.

use thiserror::Error;

use crate::enums::PageState;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A page state transition was attempted that is not allowed.
    #[error("Invalid page transition from {from} to {to}")]
    InvalidTransition { from: PageState, to: PageState },

    /// Navigation target is not in the route table.
    #[error("Unknown route: {path}")]
    UnknownRoute { path: String },

    /// Navigation target is a placeholder feature.
    #[error("{title} is coming soon")]
    FeatureDisabled { title: String },
}
