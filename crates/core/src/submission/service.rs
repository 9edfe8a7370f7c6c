//! Submission service - sends a single new-request payload

use std::sync::Arc;

use czds_domain::constants::REQUESTS_CREATE_PATH;
use czds_domain::{CzdsError, RequestSubmission, Result};
use tracing::{debug, info};

use crate::ports::RemoteInvoker;

/// Sends zone access requests to the portal.
#[derive(Clone)]
pub struct SubmissionService {
    invoker: Arc<dyn RemoteInvoker>,
}

impl SubmissionService {
    pub fn new(invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self { invoker }
    }

    /// Submit a request. Success is the absence of an error.
    ///
    /// Only the structural invariants of the payload are checked locally;
    /// whether the request is acceptable is up to the portal.
    ///
    /// # Errors
    /// - [`CzdsError::InvalidSubmission`] if the payload is malformed (no
    ///   call is made)
    /// - [`CzdsError::Rejected`] with the portal's explanation when it
    ///   declines the request (stale terms version, duplicate request,
    ///   unknown TLD)
    /// - transport failures unchanged
    pub async fn submit(&self, submission: &RequestSubmission) -> Result<()> {
        submission.validate()?;

        debug!(
            all_tlds = submission.request_all_tlds,
            tld_count = submission.tld_names.len(),
            tc_version = %submission.tc_version,
            "Submitting zone request"
        );

        self.invoker
            .post_unit(REQUESTS_CREATE_PATH, submission)
            .await
            .map_err(CzdsError::into_rejected)?;

        info!(tld_count = submission.tld_names.len(), "Zone request submitted");
        Ok(())
    }
}
