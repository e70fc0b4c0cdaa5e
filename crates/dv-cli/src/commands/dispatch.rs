use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Home => commands::home::handle(ctx, flags).await,
        Commands::Text(args) => commands::text::handle(&args, ctx, flags).await,
        Commands::Image(args) => commands::image::handle(&args, ctx, flags).await,
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Schema => commands::schema::handle(flags),
    }
}
