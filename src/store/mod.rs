//! Read-only access to the trade database.

pub mod connection;
pub mod extract;
pub mod value;

pub use connection::TradeStore;

/// Table holding one row per tracked trade.
pub const TRADES_TABLE: &str = "trades";

/// Table holding point-in-time observations of trades.
pub const SNAPSHOTS_TABLE: &str = "snapshots";

/// Table holding strategy configuration rows.
pub const STRATEGY_TABLE: &str = "strategy_config";

/// Snapshot column used for chronological ordering.
pub const SNAPSHOT_DATE_COLUMN: &str = "snapshot_date";

/// Every table the exporter reads, in output order.
pub const EXPORT_TABLES: [&str; 3] = [TRADES_TABLE, SNAPSHOTS_TABLE, STRATEGY_TABLE];
