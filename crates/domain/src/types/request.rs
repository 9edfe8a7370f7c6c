//! Zone request records returned by the portal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::{AvailabilityStatus, RequestStatus};
use crate::utils::wire::null_as_default;

/// The portal reports "no expiration set" as the Unix epoch rather than
/// omitting the field.
fn expiry_from_sentinel(expired: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if expired == DateTime::<Utc>::UNIX_EPOCH {
        None
    } else {
        Some(expired)
    }
}

/// One row of the request listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub tld: String,
    /// UTF-8 decoded form of the (possibly punycode) TLD. The portal spells
    /// the key `ulable`.
    #[serde(rename = "ulable", default)]
    pub u_label: String,
    pub status: RequestStatus,
    pub created: DateTime<Utc>,
    #[serde(rename = "last_updated")]
    pub last_updated: DateTime<Utc>,
    /// Raw expiry value; the epoch means "never". Use [`Self::expires_at`].
    pub expired: DateTime<Utc>,
    #[serde(rename = "sftp", default)]
    pub sftp_enabled: bool,
}

impl RequestSummary {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        expiry_from_sentinel(self.expired)
    }

    pub fn never_expires(&self) -> bool {
        self.expires_at().is_none()
    }
}

/// A page of the request listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestList {
    #[serde(rename = "requests", default, deserialize_with = "null_as_default")]
    pub items: Vec<RequestSummary>,
    /// Number of requests matching the query across all pages.
    #[serde(rename = "totalRequests", default)]
    pub total_matching: i64,
}

/// Current request eligibility of a single TLD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldAvailability {
    pub tld: String,
    #[serde(rename = "ulable", default)]
    pub u_label: String,
    #[serde(rename = "currentStatus")]
    pub current_status: AvailabilityStatus,
    #[serde(rename = "sftp", default)]
    pub sftp_enabled: bool,
}

/// A lifecycle event on a request, e.g. "requested" or "approved".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtpDetails {
    #[serde(rename = "privateDataError", default)]
    pub private_data_error: bool,
}

/// Full detail and timeline of a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetail {
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// The TLD this request is for, when the portal includes it.
    #[serde(rename = "tld", default)]
    pub tld_ref: Option<TldAvailability>,
    #[serde(rename = "ftpips", default, deserialize_with = "null_as_default")]
    pub ftp_ips: Vec<String>,
    pub status: RequestStatus,
    #[serde(rename = "tcVersion", default)]
    pub tc_version: String,
    pub created: DateTime<Utc>,
    #[serde(rename = "requestIp", default)]
    pub requesting_ip: String,
    #[serde(default)]
    pub reason: String,
    #[serde(rename = "last_updated")]
    pub last_updated: DateTime<Utc>,
    pub expired: DateTime<Utc>,
    /// Chronological.
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<HistoryEntry>,
    #[serde(rename = "ftpDetails", default)]
    pub ftp_details: Option<FtpDetails>,
    #[serde(rename = "privateDataError", default)]
    pub private_data_error: bool,
}

impl RequestDetail {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        expiry_from_sentinel(self.expired)
    }

    pub fn never_expires(&self) -> bool {
        self.expires_at().is_none()
    }

    /// FTP private-data flag, `None` when the portal sent no FTP block.
    pub fn ftp_private_data_error(&self) -> Option<bool> {
        self.ftp_details.map(|details| details.private_data_error)
    }
}
