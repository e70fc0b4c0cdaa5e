use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Store the session token issued by the identity provider.
    Login(AuthLoginArgs),
    /// Sign out and clear the stored session.
    Logout,
    /// Show current session status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Session token (JWT). Read from `DEEPVERIFY_AUTH__TOKEN` when omitted.
    #[arg(long)]
    pub token: Option<String>,
}
