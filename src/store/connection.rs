//! Read-only connection to the source database.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags};
use tracing::debug;

use crate::error::{Error, Result};

/// A read-only handle on the trade database.
///
/// Opening never creates or mutates the source file: a missing path is
/// reported as [`Error::MissingSource`] before SQLite is involved, and the
/// connection itself is opened with `SQLITE_OPEN_READ_ONLY`.
pub struct TradeStore {
    conn: Connection,
    path: PathBuf,
}

impl TradeStore {
    /// Open the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] if the file does not exist, or a
    /// database error if it cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingSource {
                path: path.to_path_buf(),
            });
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened trade database");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Path the store was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// True when `table` exists in the database.
    ///
    /// # Errors
    ///
    /// Returns a database error if the catalog query fails.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Number of rows in `table`.
    ///
    /// # Errors
    ///
    /// Returns a database error if the table cannot be counted.
    pub fn row_count(&self, table: &str) -> Result<i64> {
        let count: i64 =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
                    row.get(0)
                })?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_db(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE trades (id INTEGER PRIMARY KEY, symbol TEXT);
             INSERT INTO trades (symbol) VALUES ('AAPL'), ('MSFT');",
        )
        .unwrap();
    }

    #[test]
    fn open_missing_file_reports_missing_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.db");

        match TradeStore::open(&path) {
            Err(Error::MissingSource { path: reported }) => assert_eq!(reported, path),
            Err(other) => panic!("expected MissingSource, got {other:?}"),
            Ok(_) => panic!("expected MissingSource, got a connection"),
        }
        // the failed open must not have created the file
        assert!(!path.exists());
    }

    #[test]
    fn open_existing_file_succeeds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trades.db");
        create_db(&path);

        let store = TradeStore::open(&path).unwrap();
        assert_eq!(store.path(), path);
    }

    #[test]
    fn opened_store_is_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trades.db");
        create_db(&path);

        let store = TradeStore::open(&path).unwrap();
        let result = store
            .connection()
            .execute("INSERT INTO trades (symbol) VALUES ('NVDA')", []);
        assert!(result.is_err());
    }

    #[test]
    fn table_exists_distinguishes_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trades.db");
        create_db(&path);

        let store = TradeStore::open(&path).unwrap();
        assert!(store.table_exists("trades").unwrap());
        assert!(!store.table_exists("snapshots").unwrap());
    }

    #[test]
    fn row_count_counts_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trades.db");
        create_db(&path);

        let store = TradeStore::open(&path).unwrap();
        assert_eq!(store.row_count("trades").unwrap(), 2);
    }

    #[test]
    fn row_count_on_missing_table_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trades.db");
        create_db(&path);

        let store = TradeStore::open(&path).unwrap();
        assert!(store.row_count("snapshots").is_err());
    }
}
