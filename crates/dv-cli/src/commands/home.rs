use dv_core::{Feature, Route};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

const TAGLINE: &str =
    "Combating misinformation with AI-powered fact-checking and verification tools";

const ABOUT: &str = "DeepVerify uses advanced machine learning algorithms to detect fake news \
and misinformation in crime reporting. Our system analyzes text, images, and cross-references \
with verified databases. By linking news with official crime records, we help build public \
trust and promote truthful information.";

#[derive(Debug, Serialize)]
struct FeatureCard {
    title: &'static str,
    description: &'static str,
    command: &'static str,
    status: &'static str,
}

impl From<&Feature> for FeatureCard {
    fn from(feature: &Feature) -> Self {
        let command = match feature.route() {
            Some(Route::TextAnalysis) => "dv text <TEXT>",
            Some(Route::ImageAnalysis) => "dv image <PATH>",
            _ => "-",
        };
        Self {
            title: feature.title,
            description: feature.description,
            command,
            status: if feature.disabled { "coming soon" } else { "available" },
        }
    }
}

#[derive(Debug, Serialize)]
struct HomeResponse {
    welcome: &'static str,
    tagline: &'static str,
    user: String,
    features: Vec<FeatureCard>,
    about: &'static str,
}

/// Handle `dv home`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let gate = ctx.mount(Route::Home)?;

    let response = HomeResponse {
        welcome: "Welcome to DeepVerify",
        tagline: TAGLINE,
        user: gate.identity().display_name().to_string(),
        features: Feature::ALL.iter().map(FeatureCard::from).collect(),
        about: ABOUT,
    };

    output(&response, flags.format)
}
