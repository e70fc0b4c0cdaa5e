use std::fs;
use std::path::PathBuf;

use crate::error::AuthError;

const KEYRING_USER: &str = "session-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Env var consulted between the keyring and the credentials file.
pub const TOKEN_ENV_VAR: &str = "DEEPVERIFY_AUTH__TOKEN";

/// Local persistence for the provider's session token.
///
/// Load priority: keyring → `DEEPVERIFY_AUTH__TOKEN` env → file
/// (`~/.deepverify/credentials`). The env token is captured at construction.
#[derive(Debug, Clone)]
pub struct TokenStore {
    keyring_service: Option<String>,
    env_token: Option<String>,
    credentials_path: Option<PathBuf>,
}

impl TokenStore {
    /// Store backed by the OS keychain under `service`, with the default
    /// credentials file as fallback.
    #[must_use]
    pub fn new(service: &str) -> Self {
        Self {
            keyring_service: Some(service.to_string()),
            env_token: std::env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|token| !token.trim().is_empty()),
            credentials_path: default_credentials_path(),
        }
    }

    /// Store that never touches the keychain or the environment. Used by
    /// tests and headless hosts.
    #[must_use]
    pub const fn file_only(path: PathBuf) -> Self {
        Self {
            keyring_service: None,
            env_token: None,
            credentials_path: Some(path),
        }
    }

    /// Supply the token that would otherwise come from `DEEPVERIFY_AUTH__TOKEN`.
    #[must_use]
    pub fn with_env_token(mut self, token: impl Into<String>) -> Self {
        self.env_token = Some(token.into()).filter(|token| !token.trim().is_empty());
        self
    }

    /// Persist a token. Falls back to file if the keyring is unavailable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        let Some(entry) = self.keyring_entry() else {
            return self.store_file(token);
        };
        match entry.set_password(token) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.store_file(token)
            }
        }
    }

    /// Load the stored token, if any.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        if let Some(entry) = self.keyring_entry()
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        if let Some(token) = &self.env_token {
            return Some(token.clone());
        }

        self.load_file()
    }

    /// Delete stored credentials from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry()
            && let Err(error) = entry.delete_credential()
        {
            tracing::debug!(%error, "no keyring credential to delete");
        }

        let path = self.credentials_path()?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    /// Which tier the current token came from (for status display).
    #[must_use]
    pub fn detect_source(&self) -> Option<&'static str> {
        if let Some(entry) = self.keyring_entry()
            && entry.get_password().is_ok_and(|t| !t.is_empty())
        {
            return Some("keyring");
        }
        if self.env_token.is_some() {
            return Some("env");
        }
        if self.load_file().is_some() {
            return Some("file");
        }
        None
    }

    // --- Private helpers ---

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn credentials_path(&self) -> Result<PathBuf, AuthError> {
        self.credentials_path.clone().ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found, cannot store credentials".into())
        })
    }

    fn store_file(&self, token: &str) -> Result<(), AuthError> {
        let path = self.credentials_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        fs::write(&path, token)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        let path = self.credentials_path.as_ref()?;
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".deepverify").join(CREDENTIALS_FILE_NAME))
}
