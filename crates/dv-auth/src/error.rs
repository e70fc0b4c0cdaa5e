use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in, redirecting to {redirect} (run `dv auth login`)")]
    SessionAbsent { redirect: String },

    #[error("invalid session token: {0}")]
    InvalidToken(String),

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),
}

impl AuthError {
    /// Redirect target when the error means "go to the auth entry point".
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::SessionAbsent { redirect } => Some(redirect),
            _ => None,
        }
    }
}
