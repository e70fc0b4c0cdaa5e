use anyhow::Context;
use dv_core::Route;
use dv_verify::{TextInput, TextSlot};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TextArgs;
use crate::commands::shared::analysis::{AnalysisResponse, analyze};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TextDetails {
    characters: usize,
}

/// Handle `dv text`.
pub async fn handle(args: &TextArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut gate = ctx.mount(Route::TextAnalysis)?;

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };
    let characters = text.trim().chars().count();

    let mut slot = TextSlot::new();
    slot.submit(TextInput::new(text))?;

    let mut workflow = ctx.workflow();
    let result = analyze(&mut workflow, &mut slot, &mut gate, "Analyzing...").await?;

    output(
        &AnalysisResponse::new(&gate, result, TextDetails { characters }),
        flags.format,
    )
}
