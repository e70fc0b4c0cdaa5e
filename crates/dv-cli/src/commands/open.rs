use dv_core::Route;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::commands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct OpenResponse {
    route: &'static str,
    title: &'static str,
    user: Option<String>,
    next: &'static str,
    back: Option<&'static str>,
}

const fn page_title(route: Route) -> &'static str {
    match route {
        Route::Auth => "Sign in",
        Route::Home => "DeepVerify",
        Route::TextAnalysis => "Text Analysis",
        Route::ImageAnalysis => "Image Analysis",
    }
}

const fn next_step(route: Route) -> &'static str {
    match route {
        Route::Auth => "dv auth login --token <JWT>",
        Route::Home => "dv home",
        Route::TextAnalysis => "dv text <TEXT>",
        Route::ImageAnalysis => "dv image <PATH>",
    }
}

/// Handle `dv open <PATH>`.
pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.path)?;
    if route == Route::Home {
        return commands::home::handle(ctx, flags).await;
    }

    let user = if route.requires_session() {
        let gate = ctx.mount(route)?;
        Some(gate.identity().display_name().to_string())
    } else {
        None
    };

    output(
        &OpenResponse {
            route: route.path(),
            title: page_title(route),
            user,
            next: next_step(route),
            back: route.back().map(Route::path),
        },
        flags.format,
    )
}
