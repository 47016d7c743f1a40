//! `dugout upload` command implementation

use std::path::Path;
use tracing::info;

use crate::api::{ApiClient, RosterUploadSummary, StatsUploadSummary, UploadKind};
use crate::error::{CliError, Result};
use crate::output::success;

/// Send a CSV file to the roster or stats import endpoint
pub async fn run(client: &ApiClient, kind: UploadKind, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.csv".to_string());

    info!(file = %path.display(), bytes = content.len(), ?kind, "Uploading CSV");

    match kind {
        UploadKind::Roster => {
            let summary: RosterUploadSummary = client.upload(kind, file_name, content).await?;
            success(&format!(
                "{} {} added, {} rows read",
                summary.message, summary.players_added, summary.rows_processed
            ));
        },
        UploadKind::Stats => {
            let summary: StatsUploadSummary = client.upload(kind, file_name, content).await?;
            success(&format!("{} {} stat lines saved", summary.message, summary.total));
        },
    }
    Ok(())
}
