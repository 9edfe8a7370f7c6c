use std::collections::{HashMap, VecDeque};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use czds_core::{RemoteCall, RemoteInvoker, ReportStream};
use czds_domain::{CzdsError, Result, TransportFailure};
use serde_json::Value;

pub const FAKE_BASE_URL: &str = "https://czds.test";

/// In-memory portal.
///
/// Responses are queued per `"METHOD path"` key and handed out in FIFO
/// order. Every call, including stream opens, is recorded.
#[derive(Default, Clone)]
pub struct FakeRemoteInvoker {
    responses: Arc<Mutex<HashMap<String, VecDeque<Result<Option<Value>>>>>>,
    streams: Arc<Mutex<VecDeque<Result<Vec<u8>>>>>,
    calls: Arc<Mutex<Vec<RemoteCall>>>,
}

impl FakeRemoteInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `key` (e.g. `"GET /czds/tlds"`).
    pub fn add_response(&self, key: &str, response: Result<Option<Value>>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn add_json(&self, key: &str, body: Value) -> &Self {
        self.add_response(key, Ok(Some(body)))
    }

    pub fn add_error(&self, key: &str, error: CzdsError) -> &Self {
        self.add_response(key, Err(error))
    }

    /// Queue the outcome of the next `open_stream` call.
    pub fn add_stream(&self, response: Result<Vec<u8>>) -> &Self {
        self.streams.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_keys(&self) -> Vec<String> {
        self.calls().iter().map(|call| format!("{} {}", call.method, call.path)).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Bodies sent to `key`, in call order.
    pub fn bodies_sent_to(&self, key: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|call| format!("{} {}", call.method, call.path) == key)
            .filter_map(|call| call.body)
            .collect()
    }

    pub fn as_invoker(&self) -> Arc<dyn RemoteInvoker> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl RemoteInvoker for FakeRemoteInvoker {
    async fn invoke(&self, call: RemoteCall) -> Result<Option<Value>> {
        let key = format!("{} {}", call.method, call.path);
        self.calls.lock().unwrap().push(call);

        let queued = self.responses.lock().unwrap().get_mut(&key).and_then(VecDeque::pop_front);
        queued.unwrap_or_else(|| {
            Err(CzdsError::Transport(TransportFailure::Network(format!(
                "No fake response configured for {key}"
            ))))
        })
    }

    async fn open_stream(&self, path: &str) -> Result<ReportStream> {
        self.calls.lock().unwrap().push(RemoteCall::get(path));

        let queued = self.streams.lock().unwrap().pop_front();
        let bytes = queued.unwrap_or_else(|| {
            Err(CzdsError::Transport(TransportFailure::Network(format!(
                "No fake stream configured for {path}"
            ))))
        })?;

        Ok(ReportStream {
            resource: format!("{FAKE_BASE_URL}{path}"),
            reader: Box::new(Cursor::new(bytes)),
        })
    }
}
