//! `dugout games` command implementation

use crate::api::{ApiClient, Game, NewGame};
use crate::error::Result;
use crate::output::{optional, success, table};

pub async fn list(client: &ApiClient) -> Result<()> {
    let games = client.list_games().await?;

    if games.is_empty() {
        println!("No games scheduled.");
        return Ok(());
    }

    let mut out = table(["ID", "Date", "Opponent", "Location", "Result"]);
    for game in &games {
        out.add_row(vec![
            game.id.to_string(),
            game.date.to_string(),
            game.opponent.clone(),
            optional(game.location.as_deref()).to_string(),
            optional(game.result.as_deref()).to_string(),
        ]);
    }
    println!("{out}");
    Ok(())
}

/// `date` is passed through as typed; the server owns date parsing
pub async fn add(
    client: &ApiClient,
    date: String,
    opponent: String,
    location: Option<String>,
    result: Option<String>,
) -> Result<()> {
    let game = NewGame {
        date,
        opponent,
        location,
        result,
    };
    let created = client.add_game(&game).await?;
    report(&created.message, created.record.as_ref());
    Ok(())
}

pub async fn remove(client: &ApiClient, id: i32) -> Result<()> {
    let deleted = client.remove_game(id).await?;
    report(&deleted.message, deleted.record.as_ref());
    Ok(())
}

fn report(message: &str, game: Option<&Game>) {
    match game {
        Some(g) => success(&format!("{message} #{} {} vs {}", g.id, g.date, g.opponent)),
        None => success(message),
    }
}
