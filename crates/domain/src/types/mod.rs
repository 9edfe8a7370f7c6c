//! Domain types and models
//!
//! Every record here is a snapshot decoded from a single portal response;
//! nothing is cached or mutated after construction.

pub mod query;
pub mod request;
pub mod status;
pub mod submission;
pub mod terms;

pub use query::{FilterQuery, Pagination, Sort, SortDirection, SortField};
pub use request::{
    FtpDetails, HistoryEntry, RequestDetail, RequestList, RequestSummary, TldAvailability,
};
pub use status::{AvailabilityStatus, RequestStatus};
pub use submission::RequestSubmission;
pub use terms::TermsAndConditions;
