//! `dugout leaderboard` command implementation

use crate::api::ApiClient;
use crate::error::Result;
use crate::output::{rate, table};

/// Career leaders, best on-base percentage first
pub async fn run(client: &ApiClient) -> Result<()> {
    let entries = client.leaderboard().await?;

    if entries.is_empty() {
        println!("No stats recorded yet.");
        return Ok(());
    }

    let mut out = table(["#", "Player", "G", "H", "HR", "R", "AB/G", "AVG", "OBP"]);
    for (rank, entry) in entries.iter().enumerate() {
        out.add_row(vec![
            (rank + 1).to_string(),
            entry.name.clone(),
            entry.games_played.to_string(),
            entry.total_hits.to_string(),
            entry.total_home_runs.to_string(),
            entry.total_runs.to_string(),
            format!("{:.2}", entry.avg_at_bats),
            rate(entry.batting_average),
            rate(entry.on_base_percentage),
        ]);
    }
    println!("{out}");
    Ok(())
}
