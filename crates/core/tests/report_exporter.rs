//! Tests for streaming the bulk request report

mod support;

use czds_core::ReportExporter;
use czds_domain::CzdsError;
use support::*;

#[tokio::test]
async fn copies_report_bytes_to_sink() {
    let fake = FakeRemoteInvoker::new();
    let report = b"tld,status,created\nbank,approved,2023-03-01\n".to_vec();
    fake.add_stream(Ok(report.clone()));

    let mut sink = Vec::new();
    let copied =
        ReportExporter::new(fake.as_invoker()).export_all_requests_report(&mut sink).await.unwrap();

    assert_eq!(sink, report);
    assert_eq!(copied, report.len() as u64);
    assert_eq!(fake.call_keys(), vec!["GET /czds/requests/report"]);
}

#[tokio::test]
async fn single_byte_report_succeeds() {
    let fake = FakeRemoteInvoker::new();
    fake.add_stream(Ok(vec![b'\n']));

    let mut sink = Vec::new();
    ReportExporter::new(fake.as_invoker()).export_all_requests_report(&mut sink).await.unwrap();

    assert_eq!(sink, vec![b'\n']);
}

#[tokio::test]
async fn empty_report_names_the_resource() {
    let fake = FakeRemoteInvoker::new();
    fake.add_stream(Ok(Vec::new()));

    let mut sink = Vec::new();
    let err = ReportExporter::new(fake.as_invoker())
        .export_all_requests_report(&mut sink)
        .await
        .unwrap_err();

    assert_eq!(err, CzdsError::EmptyReport(format!("{FAKE_BASE_URL}/czds/requests/report")));
    assert_eq!(err.to_string(), "https://czds.test/czds/requests/report was empty");
    assert!(sink.is_empty());
}

#[tokio::test]
async fn failed_call_is_not_reported_as_empty() {
    let fake = FakeRemoteInvoker::new();
    fake.add_stream(Err(network_error("connection refused")));

    let mut sink = Vec::new();
    let err = ReportExporter::new(fake.as_invoker())
        .export_all_requests_report(&mut sink)
        .await
        .unwrap_err();

    assert_eq!(err, network_error("connection refused"));
}

/// Sink that refuses every write, as a full disk would.
struct FullDisk;

impl tokio::io::AsyncWrite for FullDisk {
    fn poll_write(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
        _buf: &[u8],
    ) -> std::task::Poll<std::io::Result<usize>> {
        std::task::Poll::Ready(Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full")))
    }

    fn poll_flush(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::io::Result<()>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn poll_shutdown(
        self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::io::Result<()>> {
        std::task::Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn sink_write_failure_is_not_a_transport_failure() {
    let fake = FakeRemoteInvoker::new();
    fake.add_stream(Ok(b"tld,status\nbank,approved\n".to_vec()));

    let mut sink = FullDisk;
    let err = ReportExporter::new(fake.as_invoker())
        .export_all_requests_report(&mut sink)
        .await
        .unwrap_err();

    assert_eq!(err, CzdsError::Sink("disk full".to_string()));
}
