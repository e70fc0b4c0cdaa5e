//! # dv-auth
//!
//! Session boundary for DeepVerify pages.
//!
//! Authentication itself is hosted by an external identity provider. This
//! crate only reads the provider's session, relays its push notifications
//! (sign-in / sign-out elsewhere) to mounted pages, and stores the session
//! token locally (OS keychain via `keyring`, env var, or a 0600 file).

pub mod error;
pub mod gate;
pub mod memory;
pub mod provider;
pub mod session;
pub mod stored;
pub mod subscription;
pub mod token_store;

pub use error::AuthError;
pub use gate::SessionGate;
pub use memory::MemorySessionProvider;
pub use provider::SessionProvider;
pub use session::Session;
pub use stored::StoredSessionProvider;
pub use subscription::{SessionBroker, SessionEvent, Subscription};
pub use token_store::TokenStore;
