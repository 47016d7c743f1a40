//! Career line for one player
//!
//! Players without any stats still get a row (all zeros); only an unknown
//! player id is an error.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Copy)]
pub struct CareerQuery {
    pub player_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CareerLine {
    pub name: String,
    pub games_played: i64,
    pub total_hits: i64,
    pub total_home_runs: i64,
    pub avg_at_bats: f64,
    pub batting_average: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum CareerError {
    #[error("Player with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: CareerQuery) -> Result<CareerLine, CareerError> {
    sqlx::query_as::<_, CareerLine>(
        r#"
        SELECT
            p.name,
            COUNT(s.game_id) AS games_played,
            COALESCE(SUM(s.hits), 0)::BIGINT AS total_hits,
            COALESCE(SUM(s.home_runs), 0)::BIGINT AS total_home_runs,
            COALESCE(ROUND(AVG(s.at_bats), 2), 0)::FLOAT8 AS avg_at_bats,
            COALESCE(ROUND(SUM(s.hits)::NUMERIC / NULLIF(SUM(s.at_bats), 0), 3), 0)::FLOAT8
                AS batting_average
        FROM players p
        LEFT JOIN stats s ON s.player_id = p.id AND s.game_id IS NOT NULL
        WHERE p.id = $1
        GROUP BY p.id, p.name
        "#,
    )
    .bind(query.player_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(CareerError::NotFound(query.player_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{TestGame, TestPlayer, TestStat};

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_career_totals(pool: PgPool) -> sqlx::Result<()> {
        let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;
        let g1 = TestGame::new("2024-04-01", "Rivals").insert(&pool).await?;
        let g2 = TestGame::new("2024-04-08", "Sharks").insert(&pool).await?;
        TestStat::new(ann.id, g1.id).at_bats(4).hits(2).insert(&pool).await?;
        TestStat::new(ann.id, g2.id).at_bats(3).hits(0).insert(&pool).await?;

        let line = handle(pool.clone(), CareerQuery { player_id: ann.id }).await.unwrap();
        assert_eq!(line.name, "Ann");
        assert_eq!(line.games_played, 2);
        assert_eq!(line.total_hits, 2);
        assert_eq!(line.avg_at_bats, 3.5);
        // 2 / 7
        assert_eq!(line.batting_average, 0.286);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_player_without_stats_reports_zeros(pool: PgPool) -> sqlx::Result<()> {
        let bo = TestPlayer::new("Bo", "CF").insert(&pool).await?;

        let line = handle(pool.clone(), CareerQuery { player_id: bo.id }).await.unwrap();
        assert_eq!(line.games_played, 0);
        assert_eq!(line.total_hits, 0);
        assert_eq!(line.avg_at_bats, 0.0);
        assert_eq!(line.batting_average, 0.0);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_unknown_player(pool: PgPool) -> sqlx::Result<()> {
        let result = handle(pool.clone(), CareerQuery { player_id: 404 }).await;
        assert!(matches!(result, Err(CareerError::NotFound(404))));
        Ok(())
    }
}
