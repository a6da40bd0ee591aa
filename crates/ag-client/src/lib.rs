//! Authenticated HTTP gateway for the admin panel: session storage, bearer
//! attachment, and 401-driven session invalidation.

pub mod client;
pub mod session;
pub mod store;
pub mod transport;

mod auth;

pub use client::GatewayClient;
pub use session::{AuthState, Session, PRINCIPAL_KEY, TOKEN_KEY};
pub use store::{FileStore, MemoryStore, SessionStore};
pub use transport::{HttpTransport, PreparedRequest, Transport};
