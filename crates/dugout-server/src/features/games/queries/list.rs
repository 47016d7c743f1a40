use sqlx::PgPool;

use crate::models::Game;

#[derive(Debug, thiserror::Error)]
pub enum ListGamesError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Every game, most recent first
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<Vec<Game>, ListGamesError> {
    let games = sqlx::query_as::<_, Game>(
        "SELECT id, date, opponent, location, result FROM games ORDER BY date DESC, id DESC",
    )
    .fetch_all(&pool)
    .await?;

    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestGame;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_list_most_recent_first(pool: PgPool) -> sqlx::Result<()> {
        TestGame::new("2024-04-01", "Rivals").insert(&pool).await?;
        TestGame::new("2024-05-01", "Sharks").insert(&pool).await?;
        TestGame::new("2024-03-01", "Owls").insert(&pool).await?;

        let opponents: Vec<String> =
            handle(pool.clone()).await.unwrap().into_iter().map(|g| g.opponent).collect();
        assert_eq!(opponents, vec!["Sharks", "Rivals", "Owls"]);
        Ok(())
    }
}
