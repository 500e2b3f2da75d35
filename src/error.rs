use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting recipes
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to write a rendered recipe to disk
    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read recipe input
    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Recipe JSON did not match the expected model
    #[error("Failed to parse recipes: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
