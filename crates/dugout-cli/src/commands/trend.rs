//! `dugout trend` command implementation

use colored::Colorize;
use dugout_common::stats::TrendMetric;

use crate::api::ApiClient;
use crate::error::{CliError, Result};
use crate::output::{emit, OutputFormat};
use crate::pivot::TrendTable;

/// Fetch one trend series and print it pivoted on date
///
/// `player_id` narrows the batting-average trend to one player server-side;
/// the other metrics only exist for all players.
pub async fn run(
    client: &ApiClient,
    metric: TrendMetric,
    player_id: Option<i32>,
    players: &[String],
    format: OutputFormat,
) -> Result<()> {
    let rows = match player_id {
        Some(id) if metric == TrendMetric::BattingAverage => client.player_trend(id).await?,
        Some(_) => {
            return Err(CliError::config(format!(
                "--player-id only applies to the 'games' (batting average) trend, not '{metric}'"
            )))
        },
        None => client.trend(metric).await?,
    };

    let pivoted = TrendTable::pivot(metric, &rows, players);

    match format {
        OutputFormat::Table => {
            if pivoted.is_empty() {
                println!("No {} data yet.", metric.label().to_lowercase());
                return Ok(());
            }
            println!("{}", metric.label().cyan().bold());
            println!("{}", pivoted.to_table());
        },
        OutputFormat::Csv => emit(&pivoted.to_csv()?, None)?,
        OutputFormat::Json => {
            emit(&format!("{}\n", serde_json::to_string_pretty(&pivoted.to_json())?), None)?
        },
    }
    Ok(())
}
