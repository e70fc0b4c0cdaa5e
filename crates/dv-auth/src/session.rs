use base64::Engine as _;
use chrono::{DateTime, Utc};
use dv_core::UserIdentity;
use serde::Deserialize;

use crate::error::AuthError;

/// Authenticated-user context obtained from the identity provider.
///
/// Acquired when a page mounts and threaded through the page explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Raw provider token (JWT).
    pub token: String,
    pub identity: UserIdentity,
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct TokenClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    exp: i64,
}

impl Session {
    /// Build a session from a provider-issued JWT.
    ///
    /// Reads `sub`, `email` and `exp` from the payload. The signature is NOT
    /// verified here; the hosted provider owns token issuance.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token is not a three-part JWT,
    /// the payload is not base64url JSON, or `sub` / `exp` are missing.
    pub fn from_token(token: &str) -> Result<Self, AuthError> {
        let token = token.trim();
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::InvalidToken("expected three JWT segments".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
        let claims: TokenClaims = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::InvalidToken(format!("claims parse failed: {e}")))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?;

        Ok(Self {
            token: token.to_string(),
            identity: UserIdentity {
                user_id: claims.sub,
                email: claims.email,
            },
            expires_at,
        })
    }

    /// Check if the session is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}
