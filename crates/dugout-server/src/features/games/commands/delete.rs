use sqlx::PgPool;

use crate::models::Game;

#[derive(Debug, Clone, Copy)]
pub struct DeleteGameCommand {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteGameError {
    #[error("Game with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Delete a game unconditionally; its stat rows keep a `NULL` game reference
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: DeleteGameCommand) -> Result<Game, DeleteGameError> {
    let game = sqlx::query_as::<_, Game>(
        "DELETE FROM games WHERE id = $1 RETURNING id, date, opponent, location, result",
    )
    .bind(command.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(DeleteGameError::NotFound(command.id))?;

    tracing::info!(game_id = game.id, "Game deleted");
    Ok(game)
}
