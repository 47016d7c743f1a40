use sqlx::PgPool;

use crate::models::{Stat, STAT_COLUMNS};

#[derive(Debug, Clone, Copy)]
pub struct GetStatQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetStatError {
    #[error("Stat entry with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetStatQuery) -> Result<Stat, GetStatError> {
    let sql = format!("SELECT {STAT_COLUMNS} FROM stats WHERE id = $1");

    sqlx::query_as::<_, Stat>(&sql)
        .bind(query.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetStatError::NotFound(query.id))
}
