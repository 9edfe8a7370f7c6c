//! Portal API adapter
//!
//! Implements the core [`RemoteInvoker`](czds_core::RemoteInvoker) port over
//! HTTPS with bearer-token authentication.

pub mod auth;
pub mod transport;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use transport::CzdsHttpTransport;
