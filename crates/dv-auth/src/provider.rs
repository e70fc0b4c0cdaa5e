use crate::error::AuthError;
use crate::session::Session;
use crate::subscription::Subscription;

/// The external identity provider as seen by the pages.
pub trait SessionProvider: Send + Sync {
    /// The session active right now, if any.
    ///
    /// # Errors
    ///
    /// Returns an error only when the provider itself cannot be read; an
    /// absent session is `Ok(None)`.
    fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Subscribe to pushed session changes.
    fn subscribe(&self) -> Subscription;

    /// End the session and notify every subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if stored credentials cannot be cleared.
    fn sign_out(&self) -> Result<(), AuthError>;
}
