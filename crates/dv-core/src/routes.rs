//! Navigation table for the three pages and the auth entry point.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// A navigable page, addressed by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Auth,
    Home,
    TextAnalysis,
    ImageAnalysis,
}

impl Route {
    pub const ALL: [Self; 4] = [Self::Auth, Self::Home, Self::TextAnalysis, Self::ImageAnalysis];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Auth => "/auth",
            Self::Home => "/home",
            Self::TextAnalysis => "/text-analysis",
            Self::ImageAnalysis => "/image-analysis",
        }
    }

    /// Whether entering this page requires an active session.
    #[must_use]
    pub const fn requires_session(self) -> bool {
        !matches!(self, Self::Auth)
    }

    /// Where the page's "go back" affordance leads.
    #[must_use]
    pub const fn back(self) -> Option<Self> {
        match self {
            Self::TextAnalysis | Self::ImageAnalysis => Some(Self::Home),
            Self::Auth | Self::Home => None,
        }
    }

    /// Resolve a path to a route.
    ///
    /// The placeholder feature path resolves to [`CoreError::FeatureDisabled`]
    /// so callers can keep it inert.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownRoute` for paths outside the table.
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        if let Some(route) = Self::ALL.into_iter().find(|route| route.path() == normalized) {
            return Ok(route);
        }

        if let Some(feature) = Feature::ALL
            .iter()
            .find(|feature| feature.disabled && feature.path == normalized)
        {
            return Err(CoreError::FeatureDisabled {
                title: feature.title.to_string(),
            });
        }

        Err(CoreError::UnknownRoute {
            path: path.to_string(),
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A feature card on the Home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub disabled: bool,
}

impl Feature {
    pub const ALL: [Self; 3] = [
        Self {
            title: "Text Analysis",
            description: "Analyze news articles and text content for authenticity",
            path: "/text-analysis",
            disabled: false,
        },
        Self {
            title: "Image Analysis",
            description: "Verify the authenticity of news images and detect manipulation",
            path: "/image-analysis",
            disabled: false,
        },
        Self {
            title: "Real-time News",
            description: "Monitor and analyze live news videos (Coming soon)",
            path: "#",
            disabled: true,
        },
    ];

    /// Destination of the card, `None` for the inert placeholder.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        if self.disabled {
            return None;
        }
        Route::parse(self.path).ok()
    }
}
