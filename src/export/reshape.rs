//! Snapshot grouping by owning trade.

use serde_json::Value;

use crate::domain::document::SnapshotGroups;
use crate::domain::record::{self, Record, TRADE_ID_COLUMN};

/// Result of grouping the snapshot rows.
#[derive(Debug, Default)]
pub struct SnapshotGrouping {
    /// Trade identifier key → ordered snapshot rows.
    pub groups: SnapshotGroups,
    /// Snapshots placed into a group.
    pub grouped: usize,
    /// Snapshots dropped for lacking an owning trade.
    pub dropped: usize,
}

/// Group snapshot rows by their `trade_id` column.
///
/// Rows arrive in ascending snapshot-date order and keep that order inside
/// each group; group keys appear in first-encounter order. Rows whose
/// identifier is absent or empty (null, zero, `""`) are dropped and
/// counted. No re-sorting, deduplication, or validation happens here.
#[must_use]
pub fn group_by_trade(snapshots: Vec<Record>) -> SnapshotGrouping {
    let mut grouping = SnapshotGrouping::default();

    for snapshot in snapshots {
        let key = match snapshot.get(TRADE_ID_COLUMN) {
            Some(id) if record::is_truthy_id(id) => record::group_key(id),
            _ => {
                grouping.dropped += 1;
                continue;
            }
        };

        let entry = grouping
            .groups
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(rows) = entry {
            rows.push(Value::Object(snapshot));
        }
        grouping.grouped += 1;
    }

    grouping
}
