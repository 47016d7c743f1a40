//! `dugout players` command implementation

use colored::Colorize;

use crate::api::{ApiClient, NewPlayer, Player};
use crate::error::Result;
use crate::output::{rate, success, table};

pub async fn list(client: &ApiClient) -> Result<()> {
    let players = client.list_players().await?;

    if players.is_empty() {
        println!("No players on the roster.");
        println!("Run 'dugout players add <name> <position>' or 'dugout upload roster <file>'.");
        return Ok(());
    }

    let mut out = table(["ID", "Name", "Position"]);
    for player in &players {
        out.add_row(vec![player.id.to_string(), player.name.clone(), player.position.clone()]);
    }
    println!("{out}");
    Ok(())
}

/// Player details plus the career line
pub async fn show(client: &ApiClient, id: i32) -> Result<()> {
    let player = client.get_player(id).await?;
    let career = client.player_career(id).await?;

    println!("{} ({})", player.name.green().bold(), player.position);
    println!("  Games played:   {}", career.games_played);
    println!("  Hits:           {}", career.total_hits);
    println!("  Home runs:      {}", career.total_home_runs);
    println!("  Avg at-bats:    {:.2}", career.avg_at_bats);
    println!("  Batting avg:    {}", rate(career.batting_average));
    Ok(())
}

pub async fn add(client: &ApiClient, name: String, position: String) -> Result<()> {
    let created = client.add_player(&NewPlayer { name, position }).await?;
    report(&created.message, created.record.as_ref());
    Ok(())
}

pub async fn remove(client: &ApiClient, id: i32) -> Result<()> {
    let deleted = client.remove_player(id).await?;
    report(&deleted.message, deleted.record.as_ref());
    Ok(())
}

fn report(message: &str, player: Option<&Player>) {
    match player {
        Some(p) => success(&format!("{message} #{} {} ({})", p.id, p.name, p.position)),
        None => success(message),
    }
}
