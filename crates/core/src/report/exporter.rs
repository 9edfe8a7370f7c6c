//! Streams the "all requests" CSV report to a caller-supplied sink

use std::sync::Arc;

use czds_domain::constants::REQUESTS_REPORT_PATH;
use czds_domain::{CzdsError, Result, TransportFailure};
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::ports::{RemoteInvoker, ReportStream};

const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Exports the bulk request report.
#[derive(Clone)]
pub struct ReportExporter {
    invoker: Arc<dyn RemoteInvoker>,
}

impl ReportExporter {
    pub fn new(invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self { invoker }
    }

    /// Copy the report into `sink`, returning the number of bytes written.
    ///
    /// # Errors
    /// - failures opening or reading the report pass through as transport
    ///   failures
    /// - [`CzdsError::Sink`] when writing to or flushing `sink` fails
    /// - [`CzdsError::EmptyReport`] naming the resource when the call
    ///   succeeded but produced no bytes; the portal never sends an empty
    ///   report on purpose
    pub async fn export_all_requests_report<W>(&self, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let ReportStream { resource, mut reader } =
            self.invoker.open_stream(REQUESTS_REPORT_PATH).await?;
        debug!(resource = %resource, "Streaming request report");

        let mut buf = vec![0u8; COPY_BUFFER_SIZE];
        let mut copied: u64 = 0;
        loop {
            let read = reader.read(&mut buf).await.map_err(|e| {
                TransportFailure::Network(format!("Failed to stream {resource}: {e}"))
            })?;
            if read == 0 {
                break;
            }
            sink.write_all(&buf[..read]).await.map_err(|e| CzdsError::Sink(e.to_string()))?;
            copied += read as u64;
        }
        sink.flush().await.map_err(|e| CzdsError::Sink(e.to_string()))?;

        if copied == 0 {
            warn!(resource = %resource, "Request report was empty");
            return Err(CzdsError::EmptyReport(resource));
        }

        info!(bytes = copied, "Request report exported");
        Ok(copied)
    }
}
