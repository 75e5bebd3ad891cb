//! The export pipeline: load, extract, reshape, serialize.

pub mod reshape;
pub mod writer;

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::domain::document::{ExportDocument, ExportMeta};
use crate::error::Result;
use crate::store::{
    extract, TradeStore, SNAPSHOTS_TABLE, SNAPSHOT_DATE_COLUMN, STRATEGY_TABLE, TRADES_TABLE,
};

/// Counters and contained failures from one export run.
#[derive(Debug)]
pub struct ExportReport {
    /// Trade rows exported.
    pub trades: usize,
    /// Snapshot rows grouped under a trade.
    pub snapshots: usize,
    /// Distinct trades with at least one snapshot.
    pub trade_groups: usize,
    /// Snapshot rows dropped for lacking an owning trade.
    pub dropped_snapshots: usize,
    /// Strategy rows exported.
    pub strategies: usize,
    /// Tables whose read failed, with the failure text.
    pub table_errors: Vec<(&'static str, String)>,
    /// Path the document was written to.
    pub output: PathBuf,
}

/// Run the full export pipeline described by `config`.
///
/// Opens the source read-only, reads the three tables (each read isolated
/// from the others' failures), groups snapshots by trade, and writes the
/// document atomically to the configured output path. The source
/// connection is released before the document is written.
///
/// # Errors
///
/// Fails if the source database is missing or cannot be opened, or if the
/// document cannot be written. Per-table read failures do not fail the
/// run; they are recorded on the report.
pub fn run(config: &Config) -> Result<ExportReport> {
    let store = TradeStore::open(&config.database)?;
    info!(source = %config.database.display(), "export started");

    let trades = extract::read_or_empty(&store, TRADES_TABLE, None);
    let snapshots = extract::read_or_empty(&store, SNAPSHOTS_TABLE, Some(SNAPSHOT_DATE_COLUMN));
    let strategies = extract::read_or_empty(&store, STRATEGY_TABLE, None);
    drop(store);

    let mut table_errors = Vec::new();
    for read in [&trades, &snapshots, &strategies] {
        if let Some(error) = &read.error {
            table_errors.push((read.table, error.clone()));
        }
    }

    let grouping = reshape::group_by_trade(snapshots.rows);
    info!(
        grouped = grouping.grouped,
        dropped = grouping.dropped,
        "snapshots grouped by trade"
    );

    let document = ExportDocument {
        trades: trades.rows,
        snapshots: grouping.groups,
        strategies: strategies.rows,
        meta: ExportMeta::now(&config.database.display().to_string()),
    };
    writer::write_json(&config.output, &document)?;
    info!(output = %config.output.display(), "export finished");

    Ok(ExportReport {
        trades: document.trades.len(),
        snapshots: grouping.grouped,
        trade_groups: document.snapshots.len(),
        dropped_snapshots: grouping.dropped,
        strategies: document.strategies.len(),
        table_errors,
        output: config.output.clone(),
    })
}
