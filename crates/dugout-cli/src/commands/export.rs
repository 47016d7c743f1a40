//! `dugout export` command implementation

use std::path::Path;

use crate::api::{ApiClient, StatFilters};
use crate::commands::stats::to_csv;
use crate::error::{CliError, Result};
use crate::output::emit;

/// Write every stat line to `output`; the extension picks CSV or JSON
pub async fn stats(client: &ApiClient, filters: &StatFilters, output: &Path) -> Result<()> {
    let extension = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let render: fn(&[crate::api::StatListItem]) -> Result<String> = match extension.as_deref() {
        Some("csv") => to_csv,
        Some("json") => |rows| Ok(format!("{}\n", serde_json::to_string_pretty(rows)?)),
        _ => {
            return Err(CliError::config(format!(
                "Cannot tell the export format from '{}'. Use a .csv or .json file name.",
                output.display()
            )))
        },
    };

    let rows = client.list_stats(filters).await?;
    emit(&render(&rows)?, Some(output))
}
