use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database file not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_names_the_path() {
        let err = Error::MissingSource {
            path: PathBuf::from("trade_guardian.db"),
        };
        assert_eq!(
            err.to_string(),
            "database file not found: trade_guardian.db"
        );
    }

    #[test]
    fn config_error_converts_into_error() {
        let err: Error = ConfigError::MissingField { field: "database" }.into();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { field: "database" })
        ));
    }

    #[test]
    fn invalid_value_includes_reason() {
        let err = ConfigError::InvalidValue {
            field: "logging.format",
            reason: "must be \"pretty\" or \"json\"".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("logging.format"));
        assert!(message.contains("pretty"));
    }
}
