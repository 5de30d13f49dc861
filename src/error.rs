//! Coursekit error types

use crate::forms::ParseError;
use thiserror::Error;

/// Coursekit error type
#[derive(Error, Debug)]
pub enum Error {
    /// Application configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a module configuration from the store failed
    #[error("Failed to read configuration for module '{module}': {reason}")]
    ConfigRead { module: String, reason: String },

    /// A module factory rejected the submitted form data
    #[error("Invalid submission for module '{module}': {source}")]
    FieldParse {
        module: String,
        #[source]
        source: ParseError,
    },

    /// Committing the configuration store failed
    #[error("Failed to commit configuration store: {0}")]
    StoreCommit(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for coursekit operations
pub type Result<T> = std::result::Result<T, Error>;
