use sqlx::PgPool;

use crate::models::Player;

#[derive(Debug, Clone, Copy)]
pub struct DeletePlayerCommand {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePlayerError {
    #[error("Player with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Delete a player unconditionally
///
/// Stat rows referencing the player are kept; the schema sets their
/// `player_id` to `NULL`.
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, command: DeletePlayerCommand) -> Result<Player, DeletePlayerError> {
    let deleted = sqlx::query_as::<_, Player>(
        "DELETE FROM players WHERE id = $1 RETURNING id, name, position",
    )
    .bind(command.id)
    .fetch_optional(&pool)
    .await?;

    let player = deleted.ok_or(DeletePlayerError::NotFound(command.id))?;
    tracing::info!(player_id = player.id, "Player deleted");
    Ok(player)
}
