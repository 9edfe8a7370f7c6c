//! Portal constants
//!
//! Centralized location for the CZDS endpoint paths and defaults used by the
//! client.

// Connection defaults
pub const DEFAULT_BASE_URL: &str = "https://czds-api.icann.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Request endpoints
pub const REQUESTS_LIST_PATH: &str = "/czds/requests/all";
pub const REQUESTS_CREATE_PATH: &str = "/czds/requests/create";
pub const REQUESTS_REPORT_PATH: &str = "/czds/requests/report";
pub const REQUEST_DETAIL_PATH_PREFIX: &str = "/czds/requests/";

// Catalog endpoints
pub const TLDS_PATH: &str = "/czds/tlds";
pub const TERMS_PATH: &str = "/czds/terms/condition";

/// Path of the detail endpoint for a single request.
///
/// The identifier is percent-encoded so it always stays a single path
/// segment below the requests endpoint.
pub fn request_detail_path(request_id: &str) -> String {
    format!("{REQUEST_DETAIL_PATH_PREFIX}{}", urlencoding::encode(request_id))
}

/// Whether `request_id` can name a request at all. Empty and dot-segment
/// identifiers would resolve to another endpoint once the URL is normalised.
pub fn is_addressable_request_id(request_id: &str) -> bool {
    !matches!(request_id, "" | "." | "..")
}
