use crate::error::AuthError;
use crate::provider::SessionProvider;
use crate::session::Session;
use crate::subscription::{SessionBroker, Subscription};

/// In-process provider. Sessions live only as long as the value.
#[derive(Debug, Default)]
pub struct MemorySessionProvider {
    broker: SessionBroker,
}

impl MemorySessionProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self {
            broker: SessionBroker::new(Some(session)),
        }
    }

    /// Simulate a sign-in elsewhere.
    pub fn sign_in(&self, session: Session) {
        tracing::info!(user_id = %session.identity.user_id, "signed in");
        self.broker.publish(Some(session));
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.broker.subscriber_count()
    }
}

impl SessionProvider for MemorySessionProvider {
    fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.broker.current())
    }

    fn subscribe(&self) -> Subscription {
        self.broker.subscribe()
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        tracing::info!("signed out");
        self.broker.publish(None);
        Ok(())
    }
}
