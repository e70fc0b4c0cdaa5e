//! Session provider configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_entry_path() -> String {
    "/auth".into()
}

fn default_keyring_service() -> String {
    "deepverify-cli".into()
}

const fn default_expiry_buffer_secs() -> i64 {
    60
}

const fn default_poll_interval_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Route users are redirected to when no session is present.
    #[serde(default = "default_entry_path")]
    pub entry_path: String,

    /// OS keychain service the session token is stored under.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Tokens expiring within this many seconds count as signed out.
    #[serde(default = "default_expiry_buffer_secs")]
    pub expiry_buffer_secs: i64,

    /// How often a page waiting on an analysis re-checks the stored session.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            entry_path: default_entry_path(),
            keyring_service: default_keyring_service(),
            expiry_buffer_secs: default_expiry_buffer_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.entry_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "auth.entry_path".into(),
                reason: format!("'{}' must start with '/'", self.entry_path),
            });
        }
        if self.keyring_service.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.keyring_service".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.expiry_buffer_secs < 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.expiry_buffer_secs".into(),
                reason: "must not be negative".into(),
            });
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.poll_interval_ms".into(),
                reason: "must be greater than 0".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert_eq!(config.entry_path, "/auth");
        assert_eq!(config.keyring_service, "deepverify-cli");
        assert_eq!(config.expiry_buffer_secs, 60);
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn relative_entry_path_is_rejected() {
        let config = AuthConfig {
            entry_path: "auth".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_buffer_is_rejected() {
        let config = AuthConfig {
            expiry_buffer_secs: -5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let config = AuthConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
