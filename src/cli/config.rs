//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your paths", path.display()));
    output::note(&format!(
        "2. Run: tradedump config validate -c {}",
        path.display()
    ));
    output::note(&format!("3. Run: tradedump export -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Effective Configuration");
    if path.exists() {
        output::field("Config file", path.display());
    } else {
        output::note(&format!("{} not found; showing defaults", path.display()));
    }
    output::field("Database", config.database.display());
    output::field("Output", config.output.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());

    let config = Config::load(path)?;
    output::success("Config file is valid");

    if !config.database.is_file() {
        output::warning(&format!(
            "database file {} does not exist yet (export will fail until it does)",
            config.database.display()
        ));
    }

    output::field("Next", format!("tradedump export -c {}", path.display()));
    Ok(())
}
