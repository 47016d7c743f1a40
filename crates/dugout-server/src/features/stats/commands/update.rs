//! Replace stat command
//!
//! Counting fields are checked for sign only. Unlike recording a new line,
//! hits are not compared against at-bats here; existing clients depend on
//! being able to save such lines. Missing player or game references are
//! reported the same way as when recording.

use dugout_common::stats::StatLine;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::create::require_ids;
use crate::features::shared::error_helpers::{violated_foreign_key, STATS_GAME_FK, STATS_PLAYER_FK};
use crate::features::shared::validation::check_non_negative;
use crate::models::{Stat, STAT_COLUMNS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatCommand {
    #[serde(skip)]
    pub id: i32,
    pub player_id: Option<i32>,
    pub game_id: Option<i32>,
    #[serde(flatten)]
    pub line: StatLine,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateStatError {
    #[error("Player ID and Game ID are required.")]
    MissingIds,
    #[error("Stat values cannot be negative.")]
    Negative,
    #[error("Stat entry with ID {0} not found.")]
    NotFound(i32),
    #[error("Player with ID {0} does not exist.")]
    PlayerMissing(i32),
    #[error("Game with ID {0} does not exist.")]
    GameMissing(i32),
    #[error("Database error while updating stat.")]
    Database(#[source] sqlx::Error),
}

impl UpdateStatCommand {
    pub fn validate(&self) -> Result<(i32, i32), UpdateStatError> {
        let ids = require_ids(self.player_id, self.game_id).ok_or(UpdateStatError::MissingIds)?;
        check_non_negative(&self.line).map_err(|_| UpdateStatError::Negative)?;
        Ok(ids)
    }
}

#[tracing::instrument(skip(pool, command), fields(stat_id = command.id))]
pub async fn handle(pool: PgPool, command: UpdateStatCommand) -> Result<Stat, UpdateStatError> {
    let (player_id, game_id) = command.validate()?;
    let l = &command.line;

    let sql = format!(
        r#"
        UPDATE stats
        SET player_id = $1, game_id = $2, at_bats = $3, hits = $4, runs = $5,
            rbis = $6, home_runs = $7, walks = $8, strikeouts = $9, doubles = $10,
            triples = $11, hit_by_pitch = $12, sacrifice_flies = $13, stolen_bases = $14
        WHERE id = $15
        RETURNING {STAT_COLUMNS}
        "#
    );

    let stat = sqlx::query_as::<_, Stat>(&sql)
        .bind(player_id)
        .bind(game_id)
        .bind(l.at_bats)
        .bind(l.hits)
        .bind(l.runs)
        .bind(l.rbis)
        .bind(l.home_runs)
        .bind(l.walks)
        .bind(l.strikeouts)
        .bind(l.doubles)
        .bind(l.triples)
        .bind(l.hit_by_pitch)
        .bind(l.sacrifice_flies)
        .bind(l.stolen_bases)
        .bind(command.id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| match violated_foreign_key(&e) {
            Some(STATS_PLAYER_FK) => UpdateStatError::PlayerMissing(player_id),
            Some(STATS_GAME_FK) => UpdateStatError::GameMissing(game_id),
            _ => UpdateStatError::Database(e),
        })?;

    stat.ok_or(UpdateStatError::NotFound(command.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{TestGame, TestPlayer, TestStat};

    #[test]
    fn test_negative_values_rejected() {
        let cmd = UpdateStatCommand {
            id: 1,
            player_id: Some(1),
            game_id: Some(1),
            line: StatLine {
                runs: -1,
                ..StatLine::default()
            },
        };
        assert!(matches!(cmd.validate(), Err(UpdateStatError::Negative)));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_hits_above_at_bats_accepted_on_update(pool: PgPool) -> sqlx::Result<()> {
        let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;
        let game = TestGame::new("2024-04-01", "Rivals").insert(&pool).await?;
        let stat = TestStat::new(ann.id, game.id).at_bats(4).hits(2).insert(&pool).await?;

        let cmd = UpdateStatCommand {
            id: stat.id,
            player_id: Some(ann.id),
            game_id: Some(game.id),
            line: StatLine {
                at_bats: 2,
                hits: 5,
                ..StatLine::default()
            },
        };

        let updated = handle(pool.clone(), cmd).await.unwrap();
        assert_eq!(updated.line.hits, 5);
        assert_eq!(updated.line.at_bats, 2);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_unknown_references_rejected(pool: PgPool) -> sqlx::Result<()> {
        let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;
        let game = TestGame::new("2024-04-01", "Rivals").insert(&pool).await?;
        let stat = TestStat::new(ann.id, game.id).at_bats(4).hits(2).insert(&pool).await?;

        let unknown_player = UpdateStatCommand {
            id: stat.id,
            player_id: Some(9999),
            game_id: Some(game.id),
            line: StatLine::default(),
        };
        let err = handle(pool.clone(), unknown_player).await.unwrap_err();
        assert!(matches!(err, UpdateStatError::PlayerMissing(9999)));
        assert_eq!(err.to_string(), "Player with ID 9999 does not exist.");

        let unknown_game = UpdateStatCommand {
            id: stat.id,
            player_id: Some(ann.id),
            game_id: Some(9999),
            line: StatLine::default(),
        };
        let err = handle(pool.clone(), unknown_game).await.unwrap_err();
        assert!(matches!(err, UpdateStatError::GameMissing(9999)));
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_missing_stat(pool: PgPool) -> sqlx::Result<()> {
        let cmd = UpdateStatCommand {
            id: 41,
            player_id: Some(1),
            game_id: Some(1),
            line: StatLine::default(),
        };
        let err = handle(pool.clone(), cmd).await.unwrap_err();
        assert_eq!(err.to_string(), "Stat entry with ID 41 not found.");
        Ok(())
    }
}
