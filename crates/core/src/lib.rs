//! # CZDS Core
//!
//! Request workflows for the CZDS zone request portal - no transport code.
//!
//! This crate contains:
//! - The [`RemoteInvoker`] port through which every portal call is made
//! - Read services over requests, TLD availability and terms
//! - Request submission and the orchestrated request workflows
//! - Bulk report export
//!
//! ## Architecture Principles
//! - Only depends on `czds-domain`
//! - No HTTP, authentication or retry code
//! - All external dependencies via traits
//! - No caching: every operation is a fresh fetch

pub mod catalog;
pub mod orchestration;
pub mod ports;
pub mod report;
pub mod services;
pub mod submission;

pub use catalog::CatalogReader;
pub use orchestration::{eligible_tlds, EligibleRequestError, RequestOrchestrator};
pub use ports::{RemoteCall, RemoteInvoker, RemoteMethod, ReportStream};
pub use report::ReportExporter;
pub use services::CzdsServices;
pub use submission::SubmissionService;
