//! Request orchestrator - read-then-act zone request workflows
//!
//! Both workflows fetch the current terms immediately before submitting so
//! the accepted version is the one the portal requires at that moment.
//! Neither is transactional: a failed submission leaves nothing to undo,
//! and re-running a workflow is safe because fetching terms has no side
//! effects.

use std::sync::Arc;

use czds_domain::{CzdsError, RequestSubmission, Result, TldAvailability};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::CatalogReader;
use crate::ports::RemoteInvoker;
use crate::submission::SubmissionService;

/// Failure of [`RequestOrchestrator::request_all_eligible_tlds`].
#[derive(Debug, Error)]
#[error("requesting {} eligible TLD(s) failed: {source}", .attempted.len())]
pub struct EligibleRequestError {
    /// TLDs included in the failed submission. Empty when the workflow
    /// failed before anything was sent, including a payload rejected by
    /// local validation.
    pub attempted: Vec<String>,
    pub source: CzdsError,
}

impl From<CzdsError> for EligibleRequestError {
    fn from(source: CzdsError) -> Self {
        Self { attempted: Vec::new(), source }
    }
}

/// Names of the TLDs a new request can be made for, in catalog order.
pub fn eligible_tlds(catalog: &[TldAvailability]) -> Vec<String> {
    catalog
        .iter()
        .filter(|tld| tld.current_status.is_requestable())
        .map(|tld| tld.tld.clone())
        .collect()
}

/// Runs the zone request workflows.
#[derive(Clone)]
pub struct RequestOrchestrator {
    catalog: CatalogReader,
    submission: SubmissionService,
}

impl RequestOrchestrator {
    pub fn new(catalog: CatalogReader, submission: SubmissionService) -> Self {
        Self { catalog, submission }
    }

    /// Build an orchestrator whose services share one invoker.
    pub fn from_invoker(invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self::new(CatalogReader::new(invoker.clone()), SubmissionService::new(invoker))
    }

    /// Request access to specific TLDs, accepting the current terms.
    ///
    /// # Errors
    /// [`CzdsError::InvalidSubmission`] for an empty TLD list (no calls are
    /// made); otherwise any terms-fetch or submission failure, unchanged.
    pub async fn request_specific_tlds(&self, tlds: Vec<String>, reason: &str) -> Result<()> {
        if tlds.is_empty() {
            return Err(CzdsError::InvalidSubmission("no TLDs to request".into()));
        }

        let terms = self.catalog.get_current_terms().await?;
        let submission = RequestSubmission::for_tlds(tlds, reason, terms.version);
        self.submission.submit(&submission).await?;

        info!(
            tld_count = submission.tld_names.len(),
            tc_version = %submission.tc_version,
            "Requested specific TLDs"
        );
        Ok(())
    }

    /// Request every TLD whose availability allows a new request.
    ///
    /// Returns the requested TLD names in catalog order. When none are
    /// eligible the empty list is returned without fetching terms or
    /// submitting anything.
    ///
    /// # Errors
    /// An [`EligibleRequestError`] carrying the underlying failure; if the
    /// portal call for the submission failed, `attempted` lists the TLDs
    /// that were sent.
    pub async fn request_all_eligible_tlds(
        &self,
        reason: &str,
    ) -> std::result::Result<Vec<String>, EligibleRequestError> {
        let catalog = self.catalog.list_tld_availability().await?;
        let eligible = eligible_tlds(&catalog);

        if eligible.is_empty() {
            info!(catalog_size = catalog.len(), "No TLDs eligible for a new request");
            return Ok(eligible);
        }

        let terms = self.catalog.get_current_terms().await?;
        let submission = RequestSubmission::for_all_tlds(eligible, reason, terms.version);

        match self.submission.submit(&submission).await {
            Ok(()) => {
                info!(
                    tld_count = submission.tld_names.len(),
                    tc_version = %submission.tc_version,
                    "Requested all eligible TLDs"
                );
                Ok(submission.tld_names)
            }
            Err(source @ CzdsError::InvalidSubmission(_)) => {
                warn!(error = %source, "Bulk zone request not sent");
                Err(source.into())
            }
            Err(source) => {
                warn!(
                    tld_count = submission.tld_names.len(),
                    error = %source,
                    "Bulk zone request failed"
                );
                Err(EligibleRequestError { attempted: submission.tld_names, source })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use czds_domain::AvailabilityStatus;

    use super::*;

    fn tld(name: &str, status: AvailabilityStatus) -> TldAvailability {
        TldAvailability {
            tld: name.to_string(),
            u_label: name.to_string(),
            current_status: status,
            sftp_enabled: false,
        }
    }

    #[test]
    fn eligible_tlds_keeps_catalog_order() {
        let catalog = vec![
            tld("xyz", AvailabilityStatus::Revoked),
            tld("app", AvailabilityStatus::Pending),
            tld("bank", AvailabilityStatus::Available),
            tld("shop", AvailabilityStatus::Expired),
            tld("club", AvailabilityStatus::Approved),
            tld("art", AvailabilityStatus::Denied),
            tld("dev", AvailabilityStatus::Submitted),
        ];

        assert_eq!(eligible_tlds(&catalog), vec!["xyz", "bank", "shop", "art"]);
    }

    #[test]
    fn eligible_tlds_empty_when_all_active() {
        let catalog = vec![
            tld("app", AvailabilityStatus::Pending),
            tld("dev", AvailabilityStatus::Submitted),
            tld("club", AvailabilityStatus::Approved),
        ];
        assert!(eligible_tlds(&catalog).is_empty());
        assert!(eligible_tlds(&[]).is_empty());
    }

    #[test]
    fn error_reports_attempted_count() {
        let err = EligibleRequestError {
            attempted: vec!["bank".into(), "xyz".into()],
            source: CzdsError::Rejected("stale terms".into()),
        };
        assert_eq!(
            err.to_string(),
            "requesting 2 eligible TLD(s) failed: Request rejected: stale terms"
        );
    }
}
