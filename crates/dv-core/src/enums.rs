//! Verdict labels, analysis modalities, and the analysis page lifecycle.
//!
//! `PageState` provides `allowed_next_states()` so page controllers can
//! enforce valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Binary outcome of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// Content looks authentic.
    True,
    /// Content is flagged as misinformation or manipulated.
    Fake,
}

impl Label {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "TRUE",
            Self::Fake => "FAKE",
        }
    }

    #[must_use]
    pub const fn is_fake(self) -> bool {
        matches!(self, Self::Fake)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Modality
// ---------------------------------------------------------------------------

/// Kind of input an analysis was run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Text,
    Image,
}

impl Modality {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }

    /// Exclusive lower bound of the synthetic confidence score.
    #[must_use]
    pub const fn confidence_floor(self) -> f64 {
        match self {
            Self::Text => 70.0,
            Self::Image => 75.0,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PageState
// ---------------------------------------------------------------------------

/// Lifecycle of one analysis page slot.
///
/// ```text
/// idle → analyzing → resolved → idle (new input or cleared)
///                  → idle       (input replaced while pending)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    Idle,
    Analyzing,
    Resolved,
}

impl PageState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Analyzing],
            Self::Analyzing => &[Self::Resolved, Self::Idle],
            Self::Resolved => &[Self::Idle],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the analyze trigger is disabled in this state.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Analyzing)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzing => "analyzing",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
