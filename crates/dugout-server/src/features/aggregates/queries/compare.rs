//! Side-by-side career lines for two players

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Copy)]
pub struct CompareQuery {
    pub player1: i32,
    pub player2: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ComparisonLine {
    pub id: i32,
    pub name: String,
    pub games_played: i64,
    pub total_hits: i64,
    pub total_home_runs: i64,
    pub total_runs: i64,
    pub avg_at_bats: f64,
    pub batting_average: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// Also returned when both ids name the same player
    #[error("One or both players not found or have no stats recorded.")]
    NotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Returns `player1`'s line first
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: CompareQuery) -> Result<Vec<ComparisonLine>, CompareError> {
    let rows = sqlx::query_as::<_, ComparisonLine>(
        r#"
        SELECT
            p.id,
            p.name,
            COUNT(s.game_id) AS games_played,
            COALESCE(SUM(s.hits), 0)::BIGINT AS total_hits,
            COALESCE(SUM(s.home_runs), 0)::BIGINT AS total_home_runs,
            COALESCE(SUM(s.runs), 0)::BIGINT AS total_runs,
            COALESCE(ROUND(AVG(s.at_bats), 2), 0)::FLOAT8 AS avg_at_bats,
            COALESCE(ROUND(SUM(s.hits)::NUMERIC / NULLIF(SUM(s.at_bats), 0), 3), 0)::FLOAT8
                AS batting_average
        FROM players p
        LEFT JOIN stats s ON s.player_id = p.id AND s.game_id IS NOT NULL
        WHERE p.id = $1 OR p.id = $2
        GROUP BY p.id, p.name
        ORDER BY (p.id = $1) DESC
        "#,
    )
    .bind(query.player1)
    .bind(query.player2)
    .fetch_all(&pool)
    .await?;

    if rows.len() < 2 {
        return Err(CompareError::NotFound);
    }

    Ok(rows)
}
