//! Error types for the termsim command line

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while sourcing input or rendering results.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a candidates file (or stdin) failed
    #[error("failed to read candidates from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the CLI error.
pub type Result<T> = std::result::Result<T, Error>;
