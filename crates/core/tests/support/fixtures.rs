use czds_domain::{CzdsError, TransportFailure};
use serde_json::{json, Value};

pub const TLDS: &str = "GET /czds/tlds";
pub const TERMS: &str = "GET /czds/terms/condition";
pub const CREATE: &str = "POST /czds/requests/create";
pub const LIST: &str = "POST /czds/requests/all";

pub fn tld_json(tld: &str, status: &str) -> Value {
    json!({ "tld": tld, "ulable": tld, "currentStatus": status, "sftp": false })
}

pub fn terms_json(version: &str) -> Value {
    json!({
        "version": version,
        "content": "<p>Terms</p>",
        "contentUrl": "https://czds.test/terms",
        "created": "2023-01-15T00:00:00Z"
    })
}

pub fn summary_json(request_id: &str, tld: &str, status: &str) -> Value {
    json!({
        "requestId": request_id,
        "tld": tld,
        "ulable": tld,
        "status": status,
        "created": "2023-03-01T08:00:00Z",
        "last_updated": "2023-03-02T08:00:00Z",
        "expired": "1970-01-01T00:00:00Z",
        "sftp": false
    })
}

/// A 4xx answer from the portal with an explanatory body.
pub fn client_error(path: &str, status: u16, body: &str) -> CzdsError {
    CzdsError::Transport(TransportFailure::Status {
        status,
        url: format!("https://czds.test{path}"),
        body: body.to_string(),
    })
}

pub fn network_error(message: &str) -> CzdsError {
    CzdsError::Transport(TransportFailure::Network(message.to_string()))
}
