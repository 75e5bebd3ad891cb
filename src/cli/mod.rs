//! CLI module graph.

pub mod command;
pub mod config;
pub mod export;
pub mod inspect;
pub mod output;

use std::path::Path;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;

/// Load the configuration for a command, honoring an explicit `-c` path.
///
/// With an explicit path the file must exist; without one, a missing
/// default file falls back to built-in defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    }
}
