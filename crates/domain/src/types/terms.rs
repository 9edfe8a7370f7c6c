//! Terms and conditions of the portal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The terms currently in force.
///
/// `version` has to be echoed back on every submission, and the portal may
/// publish a new version at any time, so this should be fetched right before
/// submitting rather than kept around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsAndConditions {
    pub version: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "contentUrl", default)]
    pub content_url: String,
    pub created: DateTime<Utc>,
}
