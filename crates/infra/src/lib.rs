//! # CZDS Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The HTTPS transport for the portal API
//! - Configuration loading from environment and files
//! - Logging setup for binaries
//!
//! ## Architecture
//! - Implements traits defined in `czds-core`
//! - Contains all "impure" code (network, files, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{AccessTokenProvider, CzdsHttpTransport, StaticTokenProvider};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;
