//! Shared types, configuration, and error taxonomy for the admin gateway client.

pub mod config;
pub mod error;
pub mod types;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use types::{LoginOutcome, Method, Principal, RawResponse, RequestDescriptor};
