use std::sync::Arc;
use std::time::Duration;

use crate::error::AuthError;
use crate::provider::SessionProvider;
use crate::session::Session;
use crate::subscription::{SessionBroker, Subscription};
use crate::token_store::TokenStore;

/// How often a waiting page re-reads the store by default.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Provider backed by the session token persisted in a [`TokenStore`].
///
/// Expired or near-expiry tokens count as no session. The store is shared
/// with other processes, so subscriptions re-read it every poll interval and
/// a sign-out elsewhere reaches mounted pages.
#[derive(Debug)]
pub struct StoredSessionProvider {
    inner: Arc<StoreState>,
    poll_interval: Duration,
}

#[derive(Debug)]
struct StoreState {
    store: TokenStore,
    broker: SessionBroker,
    expiry_buffer_secs: i64,
}

impl StoredSessionProvider {
    #[must_use]
    pub fn new(store: TokenStore, expiry_buffer_secs: i64) -> Self {
        let inner = StoreState {
            store,
            broker: SessionBroker::default(),
            expiry_buffer_secs,
        };
        inner.broker.publish(inner.read_store());
        Self {
            inner: Arc::new(inner),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Accept a token handed over by the hosted provider and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token cannot be decoded or is
    /// already near expiry, or `AuthError::TokenStoreError` if it cannot be stored.
    pub fn sign_in(&self, token: &str) -> Result<Session, AuthError> {
        let session = Session::from_token(token)?;
        if session.is_near_expiry(self.inner.expiry_buffer_secs) {
            return Err(AuthError::InvalidToken(format!(
                "token expired at {}",
                session.expires_at.to_rfc3339()
            )));
        }
        self.inner.store.store(&session.token)?;
        tracing::info!(user_id = %session.identity.user_id, "session stored");
        self.inner.broker.publish(Some(session.clone()));
        Ok(session)
    }

    /// Where the active token was loaded from.
    #[must_use]
    pub fn token_source(&self) -> Option<&'static str> {
        self.inner.store.detect_source()
    }
}

impl StoreState {
    fn read_store(&self) -> Option<Session> {
        let token = self.store.load()?;
        match Session::from_token(&token) {
            Ok(session) if session.is_near_expiry(self.expiry_buffer_secs) => {
                tracing::warn!(
                    expires_at = %session.expires_at,
                    "stored session expires within {}s; sign in again",
                    self.expiry_buffer_secs,
                );
                None
            }
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable stored session token");
                None
            }
        }
    }

    /// Re-read the store and publish if it no longer matches the broker.
    fn refresh(&self) -> Option<Session> {
        let session = self.read_store();
        if session != self.broker.current() {
            tracing::debug!(signed_in = session.is_some(), "stored session changed");
            self.broker.publish(session.clone());
        }
        session
    }
}

impl SessionProvider for StoredSessionProvider {
    fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.inner.refresh())
    }

    fn subscribe(&self) -> Subscription {
        let state = Arc::clone(&self.inner);
        self.inner
            .broker
            .subscribe()
            .polling(self.poll_interval, move || {
                state.refresh();
            })
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.inner.store.delete()?;
        if self.inner.store.detect_source() == Some("env") {
            self.inner.refresh();
            return Err(AuthError::TokenStoreError(format!(
                "stored credentials cleared, but {} still supplies a session; unset it to sign out",
                crate::token_store::TOKEN_ENV_VAR
            )));
        }
        tracing::info!("session cleared");
        self.inner.broker.publish(None);
        Ok(())
    }
}
