//! Listing query model
//!
//! Pure data describing how the request listing should be filtered, paged
//! and sorted. Nothing here is validated beyond enum membership; the portal
//! decides whether a query makes sense.

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::status::RequestStatus;
use crate::utils::wire::empty_as_none;

/// Column the request listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum SortField {
    Tld,
    Status,
    LastUpdated,
    Expired,
    Created,
}

crate::impl_domain_status_conversions!(SortField {
    Tld => "tld",
    Status => "status",
    LastUpdated => "last_updated",
    Expired => "expired",
    Created => "created",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum SortDirection {
    Asc,
    Desc,
}

crate::impl_domain_status_conversions!(SortDirection {
    Asc => "asc",
    Desc => "desc",
});

/// Page size and zero-based page index. Zero values leave paging to the
/// portal's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub size: u32,
    pub page: u32,
}

/// Sort order; absent parts encode as empty strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    #[serde(default, with = "empty_as_none")]
    pub field: Option<SortField>,
    #[serde(default, with = "empty_as_none")]
    pub direction: Option<SortDirection>,
}

/// Query for the request listing.
///
/// The default value asks for every request with the portal's default page
/// and sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub status: RequestStatus,
    /// Substring match on the zone name.
    pub filter: String,
    pub pagination: Pagination,
    pub sort: Sort,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_text_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn paged(mut self, size: u32, page: u32) -> Self {
        self.pagination = Pagination { size, page };
        self
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = Sort { field: Some(field), direction: Some(direction) };
        self
    }
}
