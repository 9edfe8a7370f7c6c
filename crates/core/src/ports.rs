//! Port interfaces for reaching the portal
//!
//! The request workflows only need two capabilities from the outside world:
//! perform a JSON call and get a decoded value back, or open the body of a
//! call as a raw byte stream. Signing, retries and timeouts all belong to
//! the implementation behind this trait.

use async_trait::async_trait;
use czds_domain::{CzdsError, Result, TransportFailure};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncRead;

/// HTTP verb of a portal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteMethod {
    Get,
    Post,
}

impl RemoteMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for RemoteMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call against the portal API.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCall {
    pub method: RemoteMethod,
    /// Path relative to the API base URL, e.g. `/czds/tlds`.
    pub path: String,
    pub body: Option<Value>,
}

impl RemoteCall {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: RemoteMethod::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: RemoteMethod::Post, path: path.into(), body: Some(body) }
    }
}

/// Raw response body of a streaming call.
pub struct ReportStream {
    /// Fully qualified name of the resource, used in error messages.
    pub resource: String,
    pub reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl std::fmt::Debug for ReportStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportStream").field("resource", &self.resource).finish_non_exhaustive()
    }
}

/// Capability to invoke portal operations.
#[async_trait]
pub trait RemoteInvoker: Send + Sync {
    /// Perform a JSON call.
    ///
    /// Returns `Ok(None)` when the portal answered successfully with an empty
    /// body. A non-success answer is an error; an unknown resource must be
    /// reported as [`CzdsError::NotFound`].
    async fn invoke(&self, call: RemoteCall) -> Result<Option<Value>>;

    /// Open the body of a `GET` call as a byte stream without decoding it.
    async fn open_stream(&self, path: &str) -> Result<ReportStream>;
}

impl dyn RemoteInvoker {
    /// `GET` a path and decode the JSON response.
    ///
    /// # Errors
    /// Invocation failures pass through; a body that does not decode as `T`
    /// is a [`TransportFailure::Decode`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.invoke(RemoteCall::get(path)).await?;
        decode(response, path)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    /// [`TransportFailure::Encode`] if `body` cannot be serialized,
    /// otherwise as for [`get_json`](Self::get_json).
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.invoke(RemoteCall::post(path, encode(body)?)).await?;
        decode(response, path)
    }

    /// `POST` a JSON body where success is the absence of an error; any
    /// response body is ignored.
    ///
    /// # Errors
    /// [`TransportFailure::Encode`] if `body` cannot be serialized;
    /// invocation failures pass through.
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.invoke(RemoteCall::post(path, encode(body)?)).await.map(|_| ())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| TransportFailure::Encode(e.to_string()).into())
}

fn decode<T: DeserializeOwned>(response: Option<Value>, path: &str) -> Result<T> {
    serde_json::from_value(response.unwrap_or(Value::Null)).map_err(|e| {
        CzdsError::Transport(TransportFailure::Decode(format!("{path}: {e}")))
    })
}
