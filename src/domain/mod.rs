//! Domain types for the exporter: schemaless records and the output document.

pub mod document;
pub mod record;

pub use document::{ExportDocument, ExportMeta, SnapshotGroups};
pub use record::Record;
