//! Handler for the `inspect` command.

use crate::cli::command::InspectArgs;
use crate::cli::{load_config, output};
use crate::error::Result;
use crate::store::{TradeStore, EXPORT_TABLES};

/// Execute the inspect command.
///
/// Opens the database read-only and reports which exportable tables are
/// present, with row counts. Nothing is written.
pub fn execute(args: &InspectArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(db) = &args.db {
        config.database = db.clone();
    }
    config.logging.escalated(output::verbosity()).init();

    output::header(env!("CARGO_PKG_VERSION"));

    let store = TradeStore::open(&config.database)?;

    output::section("Source");
    output::field("Path", store.path().display());

    output::section("Tables");
    let mut missing = 0;
    for table in EXPORT_TABLES {
        if store.table_exists(table)? {
            let rows = store.row_count(table)?;
            output::field(table, format!("{rows} row(s)"));
        } else {
            output::warning(&format!("{table}: not present"));
            missing += 1;
        }
    }

    if missing == 0 {
        output::success("All exportable tables present");
    } else {
        output::hint("missing tables export as empty sections");
    }
    Ok(())
}
