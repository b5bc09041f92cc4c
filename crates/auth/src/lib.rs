//! Session layer: login against a token endpoint with a development
//! fallback, and session persistence through an opaque key-value store.
//!
//! The HTTP client that reaches the real token service and the storage that
//! backs the session are both external collaborators; this crate owns only
//! the seams (traits) and the login/logout control flow.

pub mod endpoint;
pub mod session;
pub mod store;

pub use endpoint::{TokenEndpoint, TokenEndpointError, TokenGrant, UserProfile};
pub use session::{AuthSession, DEV_PASSWORD, DEV_USERNAME, dev_profile, is_dev_credentials, mint_dev_token};
pub use store::{InMemorySessionStore, SessionStore};
