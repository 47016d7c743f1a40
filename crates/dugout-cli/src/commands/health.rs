//! `dugout health` command implementation

use crate::api::ApiClient;
use crate::error::{CliError, Result};
use crate::output::success;

/// Fails when the server is unreachable or reports itself unhealthy
pub async fn run(client: &ApiClient) -> Result<()> {
    if client.health_check().await? {
        success(&format!("Server at {} is healthy", client.base_url()));
        Ok(())
    } else {
        Err(CliError::config(format!(
            "Server at {} is not reachable or unhealthy",
            client.base_url()
        )))
    }
}
