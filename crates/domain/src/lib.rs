//! # CZDS Domain
//!
//! Business domain types for the CZDS zone request client.
//!
//! This crate contains:
//! - Request and TLD status models
//! - The request listing query model
//! - Zone request, terms and availability records
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other CZDS crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
