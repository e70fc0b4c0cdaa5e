//! Session gate held by a mounted page.

use dv_core::{Route, UserIdentity};

use crate::error::AuthError;
use crate::provider::SessionProvider;
use crate::session::Session;
use crate::subscription::{SessionEvent, Subscription};

/// Session context for one mounted page.
///
/// Acquired on page entry, it owns the page's subscription to session
/// changes. Dropping the gate (page teardown) releases the subscription.
#[derive(Debug)]
pub struct SessionGate {
    route: Route,
    session: Session,
    subscription: Subscription,
    entry_path: String,
}

impl SessionGate {
    /// Check for a session on page entry.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionAbsent` carrying `entry_path` as redirect when
    /// no session is active, or the provider's error if it cannot be read.
    pub fn mount<P: SessionProvider + ?Sized>(
        provider: &P,
        route: Route,
        entry_path: &str,
    ) -> Result<Self, AuthError> {
        // Subscribe first so a change between the check and the subscription
        // is not missed.
        let subscription = provider.subscribe();
        let Some(session) = provider.current_session()? else {
            tracing::info!(route = %route, redirect = entry_path, "no session on page entry");
            return Err(AuthError::SessionAbsent {
                redirect: entry_path.to_string(),
            });
        };

        tracing::debug!(route = %route, user_id = %session.identity.user_id, "page mounted");
        Ok(Self {
            route,
            session,
            subscription,
            entry_path: entry_path.to_string(),
        })
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn identity(&self) -> &UserIdentity {
        &self.session.identity
    }

    /// Wait until the provider pushes a sign-out, then return the redirect.
    ///
    /// Sign-ins elsewhere replace the held session and keep waiting.
    pub async fn wait_signed_out(&mut self) -> AuthError {
        loop {
            match self.subscription.next_event().await {
                Some(SessionEvent::SignedIn(session)) => {
                    tracing::debug!(user_id = %session.identity.user_id, "session refreshed");
                    self.session = session;
                }
                Some(SessionEvent::SignedOut) | None => {
                    tracing::info!(route = %self.route, redirect = %self.entry_path, "session ended");
                    return AuthError::SessionAbsent {
                        redirect: self.entry_path.clone(),
                    };
                }
            }
        }
    }
}
