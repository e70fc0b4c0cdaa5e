//! # dv-verify
//!
//! Mock verification workflow for DeepVerify.
//!
//! There is no classifier behind this crate. Text is flagged `FAKE` when it
//! contains "fake" or "false" (case-insensitive); images are flagged by an
//! independent random draw. Confidence scores are uniform random values.
//!
//! A page owns an [`AnalysisSlot`] for its input; a [`Workflow`] moves the
//! slot through `idle → analyzing → resolved` with a simulated delay.

pub mod analyzer;
pub mod error;
pub mod image;
pub mod input;
pub mod slot;
pub mod workflow;

pub use analyzer::{MockAnalyzer, classify_text};
pub use error::{ValidationError, VerifyError};
pub use image::{ImageFormat, ImagePayload};
pub use input::{AnalysisInput, TextInput};
pub use slot::{AnalysisSlot, AnalysisTicket};
pub use workflow::{Latency, Workflow};

/// Slot for the Text Analysis page.
pub type TextSlot = AnalysisSlot<TextInput>;
/// Slot for the Image Analysis page.
pub type ImageSlot = AnalysisSlot<ImagePayload>;
