use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Home page: signed-in user and available features.
    Home,
    /// Analyze news text for authenticity.
    Text(TextArgs),
    /// Analyze a news image for manipulation.
    Image(ImageArgs),
    /// Navigate to a page by path (e.g. /text-analysis).
    Open(OpenArgs),
    /// Session management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Print the JSON schema of an analysis result.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct TextArgs {
    /// News text to analyze.
    #[arg(required_unless_present = "file")]
    pub text: Option<String>,
    /// Read the text from a file instead.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ImageArgs {
    /// Image file to analyze (PNG, JPEG, GIF, WebP, BMP; max 5MB by default).
    pub path: PathBuf,
    /// Include the in-memory data URL of the upload in the output.
    #[arg(long)]
    pub data_url: bool,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Page path, e.g. /home, /text-analysis, /image-analysis.
    pub path: String,
}
