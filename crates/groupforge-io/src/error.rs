//! Error types for file import and export

use groupforge_core::GroupForgeError;
use thiserror::Error;

/// Errors raised while reading or writing GroupForge files
#[derive(Debug, Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV input without a header row
    #[error("CSV input is empty; expected a `Name,Description` header")]
    MissingHeader,

    /// File extension that maps to no known format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Loaded data breaks a domain rule
    #[error(transparent)]
    Domain(#[from] GroupForgeError),
}

impl From<toml::de::Error> for IoError {
    fn from(err: toml::de::Error) -> Self {
        IoError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for IoError {
    fn from(err: toml::ser::Error) -> Self {
        IoError::Toml(err.to_string())
    }
}
