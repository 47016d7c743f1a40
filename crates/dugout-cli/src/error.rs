//! Error types for the Dugout CLI
//!
//! Messages are printed as-is to the user, so they say what went wrong and,
//! where there is one, what to try next.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Every way a CLI command can fail
#[derive(Error, Debug)]
pub enum CliError {
    /// The server answered with a non-success status and an `{"error"}` body
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Required file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response arrived
    #[error("Network request failed: {0}. Check that the Dugout server is running and --server-url is correct.")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// CSV writing failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Bad flags or settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status for server-side failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = CliError::api(404, "Player not found.");
        assert_eq!(err.to_string(), "Server returned 404: Player not found.");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = CliError::config("--per-page must be at least 1");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("--per-page"));
    }
}
