//! The exported document and its metadata envelope.

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::record::Record;

/// Snapshot groups keyed by trade identifier.
///
/// Keys appear in first-encounter order; each value is an array of
/// snapshot records in ascending snapshot-date order.
pub type SnapshotGroups = Map<String, Value>;

/// The complete document handed to the Trade Analyzer.
///
/// Field order here is the serialization order.
#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub trades: Vec<Record>,
    pub snapshots: SnapshotGroups,
    pub strategies: Vec<Record>,
    pub meta: ExportMeta,
}

/// Provenance envelope for one export run.
#[derive(Debug, Serialize)]
pub struct ExportMeta {
    /// RFC 3339 timestamp of the run.
    pub generated_at: String,
    /// Source database path the document was read from.
    pub source: String,
}

impl ExportMeta {
    /// Stamp the envelope for a run over `source`.
    #[must_use]
    pub fn now(source: &str) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn document_serializes_sections_in_order() {
        let document = ExportDocument {
            trades: Vec::new(),
            snapshots: SnapshotGroups::new(),
            strategies: Vec::new(),
            meta: ExportMeta {
                generated_at: "2024-01-01T00:00:00+00:00".to_string(),
                source: "trades.db".to_string(),
            },
        };

        let text = serde_json::to_string(&document).unwrap();
        let trades = text.find("\"trades\"").unwrap();
        let snapshots = text.find("\"snapshots\"").unwrap();
        let strategies = text.find("\"strategies\"").unwrap();
        let meta = text.find("\"meta\"").unwrap();
        assert!(trades < snapshots && snapshots < strategies && strategies < meta);
    }

    #[test]
    fn meta_carries_the_source_path() {
        let meta = ExportMeta::now("data/trade_guardian.db");
        assert_eq!(meta.source, "data/trade_guardian.db");
    }

    #[test]
    fn meta_timestamp_is_rfc3339() {
        let meta = ExportMeta::now("trades.db");
        assert!(DateTime::parse_from_rfc3339(&meta.generated_at).is_ok());
    }

    #[test]
    fn record_fields_keep_insertion_order() {
        let mut record = Record::new();
        record.insert("zeta".to_string(), json!(1));
        record.insert("alpha".to_string(), json!(2));
        record.insert("mid".to_string(), json!(3));

        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(text, r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }
}
