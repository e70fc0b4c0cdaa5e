use dv_auth::SessionProvider;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    message: &'static str,
    redirect: String,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sessions.sign_out()?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            message: "Logged out successfully",
            redirect: ctx.config.auth.entry_path.clone(),
        },
        flags.format,
    )
}
