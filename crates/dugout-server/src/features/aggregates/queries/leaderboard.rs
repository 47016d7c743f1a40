//! Season leaderboard
//!
//! One row per player with at least one attached stat line, ranked by
//! on-base percentage. Ties break on name so the order is stable.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub name: String,
    pub games_played: i64,
    pub total_hits: i64,
    pub total_home_runs: i64,
    pub total_runs: i64,
    pub avg_at_bats: f64,
    pub batting_average: f64,
    pub on_base_percentage: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const LEADERBOARD_SQL: &str = r#"
    SELECT
        p.name,
        COUNT(s.game_id) AS games_played,
        COALESCE(SUM(s.hits), 0)::BIGINT AS total_hits,
        COALESCE(SUM(s.home_runs), 0)::BIGINT AS total_home_runs,
        COALESCE(SUM(s.runs), 0)::BIGINT AS total_runs,
        COALESCE(ROUND(SUM(s.at_bats)::NUMERIC / NULLIF(COUNT(s.game_id), 0), 2), 0)::FLOAT8
            AS avg_at_bats,
        COALESCE(ROUND(SUM(s.hits)::NUMERIC / NULLIF(SUM(s.at_bats), 0), 3), 0)::FLOAT8
            AS batting_average,
        COALESCE(ROUND(
            SUM(s.hits + s.walks + s.hit_by_pitch)::NUMERIC
                / NULLIF(SUM(s.at_bats + s.walks + s.hit_by_pitch + s.sacrifice_flies), 0),
            3), 0)::FLOAT8 AS on_base_percentage
    FROM stats s
    JOIN players p ON s.player_id = p.id
    JOIN games g ON s.game_id = g.id
    GROUP BY p.name
    ORDER BY on_base_percentage DESC, p.name ASC
"#;

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    let rows = sqlx::query_as::<_, LeaderboardEntry>(LEADERBOARD_SQL)
        .fetch_all(&pool)
        .await?;

    tracing::debug!(players = rows.len(), "Leaderboard computed");
    Ok(rows)
}
