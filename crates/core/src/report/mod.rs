//! Bulk request report export

pub mod exporter;

pub use exporter::ReportExporter;
