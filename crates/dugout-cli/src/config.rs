//! Connection settings for the Dugout CLI
//!
//! Flags win over environment variables, which win over the defaults below.

use crate::error::{CliError, Result};

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default server URL when neither `--server-url` nor `DUGOUT_SERVER_URL` is given.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Default timeout for API requests in seconds.
/// Can be overridden via DUGOUT_API_TIMEOUT_SECS environment variable.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dugout server base URL, without a trailing slash
    pub server_url: String,

    /// Bearer token sent with write requests
    pub token: Option<String>,

    pub timeout_secs: u64,
}

impl Config {
    /// Build from parsed flags, reading the timeout from the environment
    pub fn new(server_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let timeout_secs = match std::env::var("DUGOUT_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                CliError::config(format!("DUGOUT_API_TIMEOUT_SECS must be a whole number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_API_TIMEOUT_SECS,
        };

        let server_url = server_url.into().trim_end_matches('/').to_string();
        if server_url.is_empty() {
            return Err(CliError::config("Server URL cannot be empty"));
        }

        Ok(Self {
            server_url,
            token: token.filter(|t| !t.is_empty()),
            timeout_secs,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}
