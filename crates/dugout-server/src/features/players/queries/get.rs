use sqlx::PgPool;

use crate::models::Player;

#[derive(Debug, Clone, Copy)]
pub struct GetPlayerQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetPlayerError {
    #[error("Player with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetPlayerQuery) -> Result<Player, GetPlayerError> {
    sqlx::query_as::<_, Player>("SELECT id, name, position FROM players WHERE id = $1")
        .bind(query.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetPlayerError::NotFound(query.id))
}
