//! Error types for Dugout

use thiserror::Error;

/// Result type alias for Dugout operations
pub type Result<T> = std::result::Result<T, DugoutError>;

/// Main error type shared across the workspace
#[derive(Error, Debug)]
pub enum DugoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown trend metric '{0}'")]
    UnknownMetric(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
