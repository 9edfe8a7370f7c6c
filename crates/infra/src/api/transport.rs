//! HTTPS transport for portal calls
//!
//! Every call carries a bearer token from an [`AccessTokenProvider`] and is
//! sent exactly once. Non-success answers are mapped onto the domain errors:
//! 401/403 become authentication failures, 404 becomes
//! [`CzdsError::NotFound`] and everything else is reported as a
//! [`TransportFailure::Status`] carrying the response body so the workflows
//! can reinterpret it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use czds_core::{CzdsServices, RemoteCall, RemoteInvoker, RemoteMethod, ReportStream};
use czds_domain::{ApiConfig, CzdsConfig, CzdsError, Result, TransportFailure};
use futures::TryStreamExt;
use reqwest::header::ACCEPT;
use reqwest::{Method, Response, StatusCode};
use serde_json::Value;
use tokio_util::io::StreamReader;
use tracing::{debug, instrument};

use super::auth::{AccessTokenProvider, StaticTokenProvider};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// [`RemoteInvoker`] talking to the portal over HTTP.
pub struct CzdsHttpTransport {
    http: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: String,
}

impl CzdsHttpTransport {
    /// Build a transport for `api` using `auth` to sign calls.
    ///
    /// # Errors
    /// Returns [`CzdsError::Config`] when the API settings are invalid, or a
    /// transport error if the HTTP client cannot be built.
    pub fn new(api: &ApiConfig, auth: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        api.validate()?;

        let mut builder = HttpClient::builder().timeout(Duration::from_secs(api.timeout_seconds));
        if let Some(agent) = &api.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self { http: builder.build()?, auth, base_url: api.base_url().to_string() })
    }

    /// Build a transport signing calls with the configured static token.
    ///
    /// # Errors
    /// Returns [`CzdsError::Config`] when the configuration does not
    /// validate, or a transport error if the HTTP client cannot be built.
    pub fn from_config(config: &CzdsConfig) -> Result<Self> {
        config.validate()?;
        let auth = Arc::new(StaticTokenProvider::new(config.auth.access_token.clone()));
        Self::new(&config.api, auth)
    }

    /// Wire every portal service to this transport.
    pub fn into_services(self) -> CzdsServices {
        CzdsServices::new(Arc::new(self))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        accept_json: bool,
    ) -> Result<Response> {
        let url = self.url(path);
        let token = self.auth.access_token().await?;

        let mut request = self.http.request(method, &url).bearer_auth(token);
        if accept_json {
            request = request.header(ACCEPT, "application/json");
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Unreadable bodies count as empty.
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &url, path, body))
    }
}

fn status_error(status: StatusCode, url: &str, path: &str, body: String) -> CzdsError {
    let body = body.trim().to_string();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let reason = if body.is_empty() {
                format!("{url} returned status {status}")
            } else {
                format!("{url} returned status {status}: {body}")
            };
            TransportFailure::Auth(reason).into()
        }
        StatusCode::NOT_FOUND => {
            if body.is_empty() {
                CzdsError::NotFound(path.to_string())
            } else {
                CzdsError::NotFound(format!("{path}: {body}"))
            }
        }
        _ => TransportFailure::Status { status: status.as_u16(), url: url.to_string(), body }
            .into(),
    }
}

fn http_method(method: RemoteMethod) -> Method {
    match method {
        RemoteMethod::Get => Method::GET,
        RemoteMethod::Post => Method::POST,
    }
}

#[async_trait]
impl RemoteInvoker for CzdsHttpTransport {
    #[instrument(skip(self, call), fields(method = %call.method, path = %call.path))]
    async fn invoke(&self, call: RemoteCall) -> Result<Option<Value>> {
        let response =
            self.execute(http_method(call.method), &call.path, call.body.as_ref(), true).await?;

        if matches!(response.status(), StatusCode::NO_CONTENT | StatusCode::RESET_CONTENT) {
            debug!("No content in response");
            return Ok(None);
        }

        let bytes = response.bytes().await.map_err(|e| CzdsError::from(InfraError::from(e)))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("Empty response body");
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| TransportFailure::Decode(format!("{}: {e}", call.path)).into())
    }

    #[instrument(skip(self))]
    async fn open_stream(&self, path: &str) -> Result<ReportStream> {
        let response = self.execute(Method::GET, path, None, false).await?;
        let stream = Box::pin(response.bytes_stream().map_err(std::io::Error::other));

        Ok(ReportStream { resource: self.url(path), reader: Box::new(StreamReader::new(stream)) })
    }
}
