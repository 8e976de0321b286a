//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] groupforge_config::ConfigError),

    /// Invalid problem or engine setting
    #[error(transparent)]
    Engine(#[from] groupforge::GroupForgeError),

    /// Problem, CSV or output file error
    #[error(transparent)]
    File(#[from] groupforge_io::IoError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
