//! Request workflows composed from the catalog and submission services

pub mod orchestrator;

pub use orchestrator::{eligible_tlds, EligibleRequestError, RequestOrchestrator};
