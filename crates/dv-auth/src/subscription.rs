//! Push notifications for session changes.
//!
//! A provider owns one [`SessionBroker`]; every mounted page holds a
//! [`Subscription`]. Dropping the subscription unsubscribes.
//!
//! Providers whose state can change outside the process (a token store shared
//! with other `dv` invocations) attach a poller: while a page waits, the
//! subscription re-checks the provider on an interval and the check publishes
//! any difference through the broker.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::session::Session;

/// A session change pushed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Session),
    SignedOut,
}

/// Fan-out point for session changes.
#[derive(Debug)]
pub struct SessionBroker {
    tx: watch::Sender<Option<Session>>,
    subscribers: Arc<AtomicUsize>,
}

impl SessionBroker {
    #[must_use]
    pub fn new(initial: Option<Session>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            subscribers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Push a new session state to every live subscription.
    pub fn publish(&self, session: Option<Session>) {
        let signed_in = session.is_some();
        self.tx.send_replace(session);
        tracing::debug!(
            signed_in,
            subscribers = self.subscriber_count(),
            "session change published"
        );
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        let count = self.subscribers.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(subscribers = count, "session subscription acquired");
        Subscription {
            rx: self.tx.subscribe(),
            subscribers: Arc::clone(&self.subscribers),
            poller: None,
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.load(Ordering::SeqCst)
    }
}

impl Default for SessionBroker {
    fn default() -> Self {
        Self::new(None)
    }
}

type PollFn = Arc<dyn Fn() + Send + Sync>;

struct Poller {
    interval: Duration,
    poll: PollFn,
}

impl fmt::Debug for Poller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poller")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

/// Live subscription to session changes. Released on drop.
#[derive(Debug)]
pub struct Subscription {
    rx: watch::Receiver<Option<Session>>,
    subscribers: Arc<AtomicUsize>,
    poller: Option<Poller>,
}

impl Subscription {
    /// Run `poll` every `interval` while waiting in [`Self::next_event`].
    ///
    /// `poll` is expected to publish through the broker when it sees a change.
    #[must_use]
    pub fn polling(mut self, interval: Duration, poll: impl Fn() + Send + Sync + 'static) -> Self {
        self.poller = Some(Poller {
            interval,
            poll: Arc::new(poll),
        });
        self
    }

    /// Wait for the next pushed change.
    ///
    /// Returns `None` once the provider is gone.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        match &self.poller {
            None => self.rx.changed().await.ok()?,
            Some(poller) => loop {
                let changed = tokio::select! {
                    changed = self.rx.changed() => Some(changed),
                    () = tokio::time::sleep(poller.interval) => None,
                };
                match changed {
                    Some(result) => break result.ok()?,
                    None => (poller.poll)(),
                }
            },
        }
        let event = match self.rx.borrow_and_update().as_ref() {
            Some(session) => SessionEvent::SignedIn(session.clone()),
            None => SessionEvent::SignedOut,
        };
        Some(event)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let remaining = self.subscribers.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        tracing::debug!(subscribers = remaining, "session subscription released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::make_token;

    fn session(sub: &str) -> Session {
        Session::from_token(&make_token(sub, None, chrono::Utc::now().timestamp() + 3600))
            .expect("valid token")
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let broker = SessionBroker::default();
        let first = broker.subscribe();
        let second = broker.subscribe();
        assert_eq!(broker.subscriber_count(), 2);
        drop(first);
        assert_eq!(broker.subscriber_count(), 1);
        drop(second);
        assert_eq!(broker.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn subscription_sees_published_changes() {
        let broker = SessionBroker::new(Some(session("user_1")));
        let mut sub = broker.subscribe();

        broker.publish(None);
        assert_eq!(sub.next_event().await, Some(SessionEvent::SignedOut));

        let next = session("user_2");
        broker.publish(Some(next.clone()));
        assert_eq!(sub.next_event().await, Some(SessionEvent::SignedIn(next)));
    }

    #[tokio::test]
    async fn subscription_ends_when_broker_drops() {
        let broker = SessionBroker::default();
        let mut sub = broker.subscribe();
        drop(broker);
        assert_eq!(sub.next_event().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn poller_publishes_change_seen_between_pushes() {
        let broker = Arc::new(SessionBroker::new(Some(session("user_1"))));
        let polls = Arc::new(AtomicUsize::new(0));

        let mut sub = broker.subscribe().polling(Duration::from_millis(250), {
            let broker = Arc::clone(&broker);
            let polls = Arc::clone(&polls);
            move || {
                // The third check finds the session gone.
                if polls.fetch_add(1, Ordering::SeqCst) == 2 {
                    broker.publish(None);
                }
            }
        });

        assert_eq!(sub.next_event().await, Some(SessionEvent::SignedOut));
        assert_eq!(polls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn current_tracks_latest_publish() {
        let broker = SessionBroker::default();
        assert!(broker.current().is_none());
        broker.publish(Some(session("user_3")));
        assert_eq!(
            broker.current().map(|s| s.identity.user_id),
            Some("user_3".to_string())
        );
    }
}
