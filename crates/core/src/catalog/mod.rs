//! Read-only portal catalog: request listings, request detail, TLD
//! availability and the current terms.

pub mod reader;

pub use reader::CatalogReader;
