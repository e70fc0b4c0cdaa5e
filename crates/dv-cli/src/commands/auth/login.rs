use anyhow::Context;
use dv_auth::token_store::TOKEN_ENV_VAR;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    expires_at: String,
    next: &'static str,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = match &args.token {
        Some(token) => token.clone(),
        None => std::env::var(TOKEN_ENV_VAR)
            .with_context(|| format!("auth login: pass --token or set {TOKEN_ENV_VAR}"))?,
    };

    let session = ctx.sessions.sign_in(&token)?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: session.identity.user_id,
            email: session.identity.email,
            expires_at: session.expires_at.to_rfc3339(),
            next: "dv home",
        },
        flags.format,
    )
}
