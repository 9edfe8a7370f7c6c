//! Catalog reader - fetch-and-map over the portal's read endpoints

use std::sync::Arc;

use czds_domain::constants::{
    is_addressable_request_id, request_detail_path, REQUESTS_LIST_PATH, TERMS_PATH, TLDS_PATH,
};
use czds_domain::{
    CzdsError, FilterQuery, RequestDetail, RequestList, Result, TermsAndConditions,
    TldAvailability,
};
use tracing::{debug, info};

use crate::ports::RemoteInvoker;

/// Read-only access to requests, TLD availability and terms.
///
/// Every call is a fresh fetch; nothing is cached between calls.
#[derive(Clone)]
pub struct CatalogReader {
    invoker: Arc<dyn RemoteInvoker>,
}

impl CatalogReader {
    pub fn new(invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self { invoker }
    }

    /// List zone requests matching `filter`.
    ///
    /// The returned page may hold fewer items than
    /// [`RequestList::total_matching`]. An empty match yields an empty list.
    ///
    /// # Errors
    /// [`CzdsError::InvalidQuery`] when the portal declines the query shape;
    /// transport failures pass through unchanged.
    pub async fn list_requests(&self, filter: &FilterQuery) -> Result<RequestList> {
        debug!(
            status = %filter.status,
            filter = %filter.filter,
            page = filter.pagination.page,
            size = filter.pagination.size,
            "Listing zone requests"
        );

        let list: RequestList = self
            .invoker
            .post_json(REQUESTS_LIST_PATH, filter)
            .await
            .map_err(CzdsError::into_invalid_query)?;

        info!(returned = list.items.len(), total = list.total_matching, "Fetched request listing");
        Ok(list)
    }

    /// Fetch detail and history of one request.
    ///
    /// # Errors
    /// [`CzdsError::NotFound`] when the portal does not know `request_id`,
    /// or without a call when the identifier is empty, `.` or `..`;
    /// transport failures pass through unchanged.
    pub async fn get_request_detail(&self, request_id: &str) -> Result<RequestDetail> {
        if !is_addressable_request_id(request_id) {
            return Err(CzdsError::NotFound(format!("request {request_id:?}")));
        }

        debug!(request_id, "Fetching request detail");
        let detail: RequestDetail = self.invoker.get_json(&request_detail_path(request_id)).await?;
        debug!(request_id, status = %detail.status, history = detail.history.len(), "Fetched request detail");
        Ok(detail)
    }

    /// Availability of every TLD, in the order the portal returns them.
    ///
    /// # Errors
    /// Transport and decoding failures pass through unchanged.
    pub async fn list_tld_availability(&self) -> Result<Vec<TldAvailability>> {
        let tlds: Option<Vec<TldAvailability>> = self.invoker.get_json(TLDS_PATH).await?;
        let tlds = tlds.unwrap_or_default();
        info!(count = tlds.len(), "Fetched TLD availability");
        Ok(tlds)
    }

    /// The terms currently in force. Do not hold on to the result past the
    /// submission it is fetched for.
    ///
    /// # Errors
    /// Transport and decoding failures pass through unchanged.
    pub async fn get_current_terms(&self) -> Result<TermsAndConditions> {
        let terms: TermsAndConditions = self.invoker.get_json(TERMS_PATH).await?;
        debug!(version = %terms.version, "Fetched current terms");
        Ok(terms)
    }
}
