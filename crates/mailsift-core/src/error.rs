//! Error types for the core library.
//!
//! Filtering itself never fails; these errors come from the edges around it:
//! parsing textual selectors and loading configuration.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A textual filter selector could not be parsed.
    #[error("Invalid filter selector: {0:?}")]
    InvalidSelector(String),

    /// A saved view was requested that the configuration does not define.
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
