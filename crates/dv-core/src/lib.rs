//! # dv-core
//!
//! Core types shared across all DeepVerify crates:
//! - Verdict labels, analysis modalities, and the page state machine
//! - `VerificationResult` and its fixed explanation strings
//! - Navigation routes and the Home page feature cards
//! - Lightweight user identity for cross-crate passing
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod identity;
pub mod routes;
pub mod verdict;

pub use enums::{Label, Modality, PageState};
pub use errors::CoreError;
pub use identity::UserIdentity;
pub use routes::{Feature, Route};
pub use verdict::VerificationResult;
