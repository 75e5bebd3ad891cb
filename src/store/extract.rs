//! Table extraction into schemaless records.
//!
//! Reads are name-indexed (`SELECT *` plus the statement's column names),
//! so the exporter works against whatever columns the source happens to
//! carry. Each table read is isolated: one table failing does not stop
//! the others from being exported.

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::domain::record::Record;
use crate::error::Result;
use crate::store::{value, TradeStore};

/// Outcome of one isolated table read.
#[derive(Debug)]
pub struct TableRead {
    /// Table the read targeted.
    pub table: &'static str,
    /// Rows read, empty when the read failed.
    pub rows: Vec<Record>,
    /// Failure text when the read failed.
    pub error: Option<String>,
}

/// Read every row of `table` in storage order.
///
/// # Errors
///
/// Returns a database error if the table cannot be queried.
pub fn read_table(store: &TradeStore, table: &str) -> Result<Vec<Record>> {
    query_records(store.connection(), &format!("SELECT * FROM \"{table}\""))
}

/// Read every row of `table` ordered ascending by `order_by`.
///
/// # Errors
///
/// Returns a database error if the table cannot be queried.
pub fn read_table_ordered(store: &TradeStore, table: &str, order_by: &str) -> Result<Vec<Record>> {
    query_records(
        store.connection(),
        &format!("SELECT * FROM \"{table}\" ORDER BY \"{order_by}\" ASC"),
    )
}

/// Run one isolated table read: a failure is recorded, not propagated.
pub fn read_or_empty(
    store: &TradeStore,
    table: &'static str,
    order_by: Option<&str>,
) -> TableRead {
    let result = match order_by {
        Some(column) => read_table_ordered(store, table, column),
        None => read_table(store, table),
    };

    match result {
        Ok(rows) => {
            debug!(table, rows = rows.len(), "table read");
            TableRead {
                table,
                rows,
                error: None,
            }
        }
        Err(e) => {
            warn!(table, error = %e, "table read failed, exporting empty section");
            TableRead {
                table,
                rows: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

fn query_records(conn: &Connection, sql: &str) -> Result<Vec<Record>> {
    let mut stmt = conn.prepare(sql)?;
    // column_names borrows the statement, so own them before querying
    let columns: Vec<String> = stmt.column_names().iter().map(ToString::to_string).collect();

    let mut rows = stmt.query([])?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = Record::new();
        for (idx, name) in columns.iter().enumerate() {
            record.insert(name.clone(), value::to_json(row.get_ref(idx)?));
        }
        records.push(record);
    }
    Ok(records)
}
