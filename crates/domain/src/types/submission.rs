//! Outbound request submission payload

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{CzdsError, Result};

/// Payload for `POST /czds/requests/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubmission {
    #[serde(rename = "allTlds")]
    pub request_all_tlds: bool,
    #[serde(rename = "tldNames")]
    pub tld_names: Vec<String>,
    pub reason: String,
    /// Terms version being accepted.
    #[serde(rename = "tcVersion")]
    pub tc_version: String,
    /// The portal spells this key `additionalFtfIps`; it is left out of the
    /// payload entirely when there are none.
    #[serde(rename = "additionalFtfIps", default, skip_serializing_if = "Vec::is_empty")]
    pub additional_ftp_ips: Vec<String>,
}

impl RequestSubmission {
    /// Request the named TLDs.
    pub fn for_tlds(
        tld_names: Vec<String>,
        reason: impl Into<String>,
        tc_version: impl Into<String>,
    ) -> Self {
        Self {
            request_all_tlds: false,
            tld_names,
            reason: reason.into(),
            tc_version: tc_version.into(),
            additional_ftp_ips: Vec::new(),
        }
    }

    /// Request every eligible TLD; `tld_names` lists the ones resolved as
    /// eligible when the submission was built.
    pub fn for_all_tlds(
        tld_names: Vec<String>,
        reason: impl Into<String>,
        tc_version: impl Into<String>,
    ) -> Self {
        Self { request_all_tlds: true, ..Self::for_tlds(tld_names, reason, tc_version) }
    }

    pub fn with_additional_ftp_ips(mut self, ips: Vec<String>) -> Self {
        self.additional_ftp_ips = ips;
        self
    }

    /// Check the structural invariants of the payload.
    ///
    /// Business rules (stale terms, duplicate outstanding requests, unknown
    /// TLDs) are left to the portal.
    ///
    /// # Errors
    /// Returns [`CzdsError::InvalidSubmission`] when the reason or terms
    /// version is blank, or the TLD list is empty, has blanks, or has
    /// duplicates.
    pub fn validate(&self) -> Result<()> {
        if self.reason.trim().is_empty() {
            return Err(CzdsError::InvalidSubmission("reason must not be empty".into()));
        }
        if self.tc_version.trim().is_empty() {
            return Err(CzdsError::InvalidSubmission("terms version must not be empty".into()));
        }
        if self.tld_names.is_empty() {
            return Err(CzdsError::InvalidSubmission("no TLDs to request".into()));
        }

        let mut seen = HashSet::with_capacity(self.tld_names.len());
        for name in &self.tld_names {
            if name.trim().is_empty() {
                return Err(CzdsError::InvalidSubmission("TLD names must not be blank".into()));
            }
            if !seen.insert(name.as_str()) {
                return Err(CzdsError::InvalidSubmission(format!("duplicate TLD name: {name}")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_ftp_ips_are_omitted() {
        let submission = RequestSubmission::for_tlds(names(&["bank"]), "research", "v3");
        let encoded = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            encoded,
            json!({
                "allTlds": false,
                "tldNames": ["bank"],
                "reason": "research",
                "tcVersion": "v3"
            })
        );

        let decoded: RequestSubmission = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, submission);
    }

    #[test]
    fn present_ftp_ips_use_portal_key() {
        let submission = RequestSubmission::for_all_tlds(names(&["bank", "xyz"]), "renewal", "v3")
            .with_additional_ftp_ips(names(&["203.0.113.7"]));
        let encoded = serde_json::to_value(&submission).unwrap();

        assert_eq!(encoded["allTlds"], json!(true));
        assert_eq!(encoded["additionalFtfIps"], json!(["203.0.113.7"]));
    }

    #[test]
    fn validate_accepts_well_formed_payload() {
        let submission = RequestSubmission::for_tlds(names(&["bank", "app"]), "research", "v3");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn validate_rejects_structural_problems() {
        let cases = [
            RequestSubmission::for_tlds(names(&["bank"]), "  ", "v3"),
            RequestSubmission::for_tlds(names(&["bank"]), "research", ""),
            RequestSubmission::for_tlds(Vec::new(), "research", "v3"),
            RequestSubmission::for_tlds(names(&["bank", ""]), "research", "v3"),
            RequestSubmission::for_tlds(names(&["bank", "bank"]), "research", "v3"),
        ];

        for submission in cases {
            assert!(
                matches!(submission.validate(), Err(CzdsError::InvalidSubmission(_))),
                "expected invalid submission: {submission:?}"
            );
        }
    }
}
