//! Conversions from external infrastructure errors into domain errors.

use czds_domain::{CzdsError, TransportFailure};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CzdsError);

impl From<InfraError> for CzdsError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CzdsError> for InfraError {
    fn from(value: CzdsError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTransportFailure {
    fn into_transport_failure(self) -> TransportFailure;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TransportFailure */
/* -------------------------------------------------------------------------- */

impl IntoTransportFailure for HttpError {
    fn into_transport_failure(self) -> TransportFailure {
        if self.is_timeout() {
            return TransportFailure::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return TransportFailure::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return TransportFailure::Decode(self.to_string());
        }

        if self.is_builder() {
            return TransportFailure::Encode(self.to_string());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            let url = self.url().map(ToString::to_string).unwrap_or_default();

            return match code {
                401 | 403 => TransportFailure::Auth(message),
                _ => TransportFailure::Status { status: code, url, body: message },
            };
        }

        TransportFailure::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(CzdsError::Transport(value.into_transport_failure()))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
