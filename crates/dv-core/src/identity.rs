use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `dv-auth`, consumed by `dv-cli` page commands.
/// Contains only data fields, no session logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserIdentity {
    /// Provider user ID (from the token `sub` claim).
    pub user_id: String,
    /// Email address shown in the Home page header.
    pub email: Option<String>,
}

impl UserIdentity {
    /// Label to greet the user with: email when known, user ID otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.user_id)
    }
}
