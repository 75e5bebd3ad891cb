//! Tradedump - one-shot export of a trade-tracking SQLite database to JSON.
//!
//! This crate reads the `trades`, `snapshots`, and `strategy_config` tables
//! from a SQLite database produced by a trade tracker, regroups snapshots
//! under their owning trade, and writes a single self-describing JSON
//! document for downstream analysis tools.
//!
//! # Architecture
//!
//! The pipeline is deliberately linear:
//!
//! - **`store`** - Read-only SQLite access; rows become ordered JSON records
//! - **`export`** - Snapshot regrouping and atomic JSON file output
//! - **`cli`** - Command definitions, console output, and handlers
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface: `export`, `inspect`, and `config`
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Record and export-document types
//! - [`error`] - Error types for the crate
//! - [`export`] - The export pipeline and its report
//! - [`store`] - SQLite source access
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tradedump::config::Config;
//! use tradedump::export;
//!
//! fn main() -> tradedump::error::Result<()> {
//!     let config = Config::load_or_default(Path::new("tradedump.toml"))?;
//!     let report = export::run(&config)?;
//!     println!("exported {} trade(s)", report.trades);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod store;
