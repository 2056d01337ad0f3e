use carbonprint_schemas::key::UnknownKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarbonError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unrecognized key: {0}")]
    UnknownKey(#[from] UnknownKey),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),
}
