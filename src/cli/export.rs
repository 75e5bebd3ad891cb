//! Handler for the `export` command.

use crate::cli::command::ExportArgs;
use crate::cli::{load_config, output};
use crate::config::Config;
use crate::error::Result;
use crate::export;

/// Execute the export command.
///
/// Resolves configuration (file plus flag overrides), initializes logging,
/// runs the pipeline, and narrates the report.
pub fn execute(args: &ExportArgs) -> Result<()> {
    let config = apply_overrides(load_config(args.config.as_deref())?, args);
    config.logging.escalated(output::verbosity()).init();

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", config.database.display());
    output::field("Output", config.output.display());

    let report = export::run(&config)?;

    for (table, error) in &report.table_errors {
        output::warning(&format!("error reading {table}: {error}"));
    }

    output::section("Exported");
    output::field("Trades", report.trades);
    output::field(
        "Snapshots",
        format!(
            "{} across {} trade(s)",
            report.snapshots, report.trade_groups
        ),
    );
    output::field("Strategies", report.strategies);
    if report.dropped_snapshots > 0 {
        output::note(&format!(
            "{} snapshot(s) without a trade id were dropped",
            report.dropped_snapshots
        ));
    }

    output::success(&format!("Wrote {}", report.output.display()));
    output::hint("load the file into the Trade Analyzer to explore it");
    Ok(())
}

/// Apply `--db` and `-o` flag overrides to the loaded configuration.
fn apply_overrides(mut config: Config, args: &ExportArgs) -> Config {
    if let Some(db) = &args.db {
        config.database = db.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn flags_override_config_paths() {
        let args = ExportArgs {
            db: Some(PathBuf::from("flag.db")),
            output: Some(PathBuf::from("flag.json")),
            config: None,
        };

        let config = apply_overrides(Config::default(), &args);
        assert_eq!(config.database, PathBuf::from("flag.db"));
        assert_eq!(config.output, PathBuf::from("flag.json"));
    }

    #[test]
    fn missing_flags_keep_config_values() {
        let args = ExportArgs {
            db: None,
            output: None,
            config: None,
        };

        let config = apply_overrides(Config::default(), &args);
        assert_eq!(config.database, PathBuf::from("trade_guardian.db"));
        assert_eq!(config.output, PathBuf::from("trade_data.json"));
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        assert!(load_config(Some(std::path::Path::new(
            "/nonexistent/tradedump.toml"
        )))
        .is_err());
    }
}
