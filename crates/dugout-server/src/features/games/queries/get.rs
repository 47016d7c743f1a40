use sqlx::PgPool;

use crate::models::Game;

#[derive(Debug, Clone, Copy)]
pub struct GetGameQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetGameError {
    #[error("Game with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetGameQuery) -> Result<Game, GetGameError> {
    sqlx::query_as::<_, Game>(
        "SELECT id, date, opponent, location, result FROM games WHERE id = $1",
    )
    .bind(query.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetGameError::NotFound(query.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestGame;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_get_existing_and_missing(pool: PgPool) -> sqlx::Result<()> {
        let game = TestGame::new("2024-04-01", "Rivals")
            .with_result("W 3-1")
            .insert(&pool)
            .await?;

        let found = handle(pool.clone(), GetGameQuery { id: game.id }).await.unwrap();
        assert_eq!(found.result.as_deref(), Some("W 3-1"));

        let missing = handle(pool.clone(), GetGameQuery { id: game.id + 1 }).await;
        assert!(matches!(missing, Err(GetGameError::NotFound(_))));
        Ok(())
    }
}
