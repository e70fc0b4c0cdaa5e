use dv_auth::{SessionGate, StoredSessionProvider, TokenStore};
use dv_config::DvConfig;
use dv_core::Route;
use dv_verify::Workflow;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DvConfig,
    pub sessions: StoredSessionProvider,
}

impl AppContext {
    /// Build the session provider over the configured token store.
    #[must_use]
    pub fn init(config: DvConfig) -> Self {
        let store = TokenStore::new(&config.auth.keyring_service);
        let sessions = StoredSessionProvider::new(store, config.auth.expiry_buffer_secs)
            .with_poll_interval(config.auth.poll_interval());
        Self { config, sessions }
    }

    /// Enter a page: succeeds only with an active session.
    ///
    /// # Errors
    ///
    /// `AuthError::SessionAbsent` carrying the configured entry path.
    pub fn mount(&self, route: Route) -> Result<SessionGate, dv_auth::AuthError> {
        SessionGate::mount(&self.sessions, route, &self.config.auth.entry_path)
    }

    /// Fresh analysis workflow configured from the `analysis` section.
    #[must_use]
    pub fn workflow(&self) -> Workflow {
        Workflow::from_config(&self.config.analysis)
    }
}
