use dv_auth::SessionProvider;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize, Default)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match ctx.sessions.current_session() {
        Ok(Some(session)) => AuthStatusResponse {
            authenticated: true,
            user_id: Some(session.identity.user_id),
            email: session.identity.email,
            expires_at: Some(session.expires_at.to_rfc3339()),
            token_source: ctx.sessions.token_source(),
            note: None,
        },
        Ok(None) => AuthStatusResponse {
            note: Some(format!(
                "no valid session; pages redirect to {}",
                ctx.config.auth.entry_path
            )),
            ..AuthStatusResponse::default()
        },
        Err(error) => AuthStatusResponse {
            note: Some(error.to_string()),
            ..AuthStatusResponse::default()
        },
    };

    output(&status, flags.format)
}
