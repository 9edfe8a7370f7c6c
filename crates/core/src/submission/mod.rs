//! Submission of new zone requests

pub mod service;

pub use service::SubmissionService;
