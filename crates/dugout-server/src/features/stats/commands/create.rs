//! Record stat command
//!
//! The referenced player and game are not looked up beforehand. The insert
//! itself trips `stats_player_id_fkey` / `stats_game_id_fkey` when either is
//! missing, and the violated constraint decides which message is returned.

use dugout_common::stats::StatLine;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::shared::error_helpers::{violated_foreign_key, STATS_GAME_FK, STATS_PLAYER_FK};
use crate::features::shared::validation::{
    check_hits_within_at_bats, check_non_negative, HitsExceedAtBatsError, NegativeStatError,
};
use crate::models::{Stat, STAT_COLUMNS};

/// Command to record one player's line for one game
///
/// Missing counting fields default to 0. `RBIs` is accepted as an alias for
/// `rbis`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStatCommand {
    pub player_id: Option<i32>,
    pub game_id: Option<i32>,
    #[serde(flatten)]
    pub line: StatLine,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateStatError {
    #[error("Player ID and Game ID are required.")]
    MissingIds,
    #[error(transparent)]
    Negative(#[from] NegativeStatError),
    #[error(transparent)]
    HitsExceedAtBats(#[from] HitsExceedAtBatsError),
    #[error("Player with ID {0} does not exist.")]
    PlayerMissing(i32),
    #[error("Game with ID {0} does not exist.")]
    GameMissing(i32),
    #[error("Could not add player stats.")]
    Database(#[source] sqlx::Error),
}

/// Both ids present and non-zero
pub(crate) fn require_ids(
    player_id: Option<i32>,
    game_id: Option<i32>,
) -> Option<(i32, i32)> {
    match (player_id, game_id) {
        (Some(p), Some(g)) if p != 0 && g != 0 => Some((p, g)),
        _ => None,
    }
}

impl CreateStatCommand {
    /// Returns `(player_id, game_id)`
    pub fn validate(&self) -> Result<(i32, i32), CreateStatError> {
        let ids = require_ids(self.player_id, self.game_id).ok_or(CreateStatError::MissingIds)?;
        check_non_negative(&self.line)?;
        check_hits_within_at_bats(&self.line)?;
        Ok(ids)
    }
}

#[tracing::instrument(skip(pool, command), fields(player_id = ?command.player_id, game_id = ?command.game_id))]
pub async fn handle(pool: PgPool, command: CreateStatCommand) -> Result<Stat, CreateStatError> {
    let (player_id, game_id) = command.validate()?;
    let l = &command.line;

    let sql = format!(
        r#"
        INSERT INTO stats (
            player_id, game_id, at_bats, hits, runs, rbis, home_runs, walks,
            strikeouts, doubles, triples, hit_by_pitch, sacrifice_flies, stolen_bases
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
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
        .fetch_one(&pool)
        .await
        .map_err(|e| match violated_foreign_key(&e) {
            Some(STATS_PLAYER_FK) => CreateStatError::PlayerMissing(player_id),
            Some(STATS_GAME_FK) => CreateStatError::GameMissing(game_id),
            _ => CreateStatError::Database(e),
        })?;

    tracing::info!(stat_id = stat.id, "Stat line recorded");

    Ok(stat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{count_rows, TestGame, TestPlayer};

    fn command(player_id: i32, game_id: i32, at_bats: i32, hits: i32) -> CreateStatCommand {
        CreateStatCommand {
            player_id: Some(player_id),
            game_id: Some(game_id),
            line: StatLine {
                at_bats,
                hits,
                ..StatLine::default()
            },
        }
    }

    #[test]
    fn test_body_defaults_and_alias() {
        let cmd: CreateStatCommand =
            serde_json::from_str(r#"{"player_id": 1, "game_id": 2, "hits": 1, "RBIs": 3}"#).unwrap();
        assert_eq!(cmd.line.hits, 1);
        assert_eq!(cmd.line.rbis, 3);
        assert_eq!(cmd.line.at_bats, 0);
    }

    #[test]
    fn test_validation_order() {
        let missing = CreateStatCommand::default();
        assert!(matches!(missing.validate(), Err(CreateStatError::MissingIds)));

        let zero_id = command(0, 1, 1, 1);
        assert!(matches!(zero_id.validate(), Err(CreateStatError::MissingIds)));

        let mut negative = command(1, 1, 1, 1);
        negative.line.doubles = -1;
        let err = negative.validate().unwrap_err();
        assert_eq!(err.to_string(), "doubles cannot be negative.");

        let too_many_hits = command(1, 1, 2, 3);
        assert_eq!(
            too_many_hits.validate().unwrap_err().to_string(),
            "Hits cannot be greater than at-bats."
        );

        assert_eq!(command(1, 1, 3, 3).validate().unwrap(), (1, 1));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_records_stat(pool: PgPool) -> sqlx::Result<()> {
        let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;
        let game = TestGame::new("2024-04-01", "Rivals").insert(&pool).await?;

        let stat = handle(pool.clone(), command(ann.id, game.id, 4, 2)).await.unwrap();
        assert_eq!(stat.player_id, Some(ann.id));
        assert_eq!(stat.line.hits, 2);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_unknown_player_or_game(pool: PgPool) -> sqlx::Result<()> {
        let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;
        let game = TestGame::new("2024-04-01", "Rivals").insert(&pool).await?;

        let err = handle(pool.clone(), command(ann.id + 100, game.id, 1, 0)).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Player with ID {} does not exist.", ann.id + 100));

        let err = handle(pool.clone(), command(ann.id, game.id + 100, 1, 0)).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Game with ID {} does not exist.", game.id + 100));

        assert_eq!(count_rows(&pool, "stats").await?, 0);
        Ok(())
    }
}
