//! Create player command
//!
//! # Architecture
//!
//! - Command: Pure data structure (no behavior except validation)
//! - Handler: Standalone async function with the insert
//! - Name uniqueness is enforced by the schema; any insert failure is reported
//!   the same way, so a duplicate is not distinguishable from other failures

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::shared::validation::non_empty;
use crate::models::Player;

/// Command to create a new player
///
/// Fields are optional so that a body missing either one is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlayerCommand {
    pub name: Option<String>,
    pub position: Option<String>,
}

/// Errors that can occur when creating a player
#[derive(Debug, thiserror::Error)]
pub enum CreatePlayerError {
    #[error("Name and position are required.")]
    MissingFields,

    #[error("Could not add player. Name might already exist.")]
    InsertFailed(#[source] sqlx::Error),
}

impl CreatePlayerCommand {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            position: Some(position.into()),
        }
    }

    /// Returns the trimmed name and position
    pub fn validate(&self) -> Result<(&str, &str), CreatePlayerError> {
        match (non_empty(self.name.as_deref()), non_empty(self.position.as_deref())) {
            (Some(name), Some(position)) => Ok((name, position)),
            _ => Err(CreatePlayerError::MissingFields),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(name = ?command.name))]
pub async fn handle(pool: PgPool, command: CreatePlayerCommand) -> Result<Player, CreatePlayerError> {
    let (name, position) = command.validate()?;

    let player = sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (name, position)
        VALUES ($1, $2)
        RETURNING id, name, position
        "#,
    )
    .bind(name)
    .bind(position)
    .fetch_one(&pool)
    .await
    .map_err(CreatePlayerError::InsertFailed)?;

    tracing::info!(player_id = player.id, "Player created");

    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_success_trims() {
        let cmd = CreatePlayerCommand::new("  Ann ", "SS");
        assert_eq!(cmd.validate().unwrap(), ("Ann", "SS"));
    }

    #[test]
    fn test_validation_missing_fields() {
        let cases = [
            CreatePlayerCommand::default(),
            CreatePlayerCommand {
                name: Some("Ann".to_string()),
                position: None,
            },
            CreatePlayerCommand::new("", "SS"),
            CreatePlayerCommand::new("Ann", "   "),
        ];

        for cmd in cases {
            assert!(
                matches!(cmd.validate(), Err(CreatePlayerError::MissingFields)),
                "{cmd:?} should be rejected"
            );
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_player(pool: PgPool) -> sqlx::Result<()> {
        let player = handle(pool.clone(), CreatePlayerCommand::new("Ann", "SS"))
            .await
            .unwrap();

        assert!(player.id > 0);
        assert_eq!(player.name, "Ann");
        assert_eq!(player.position, "SS");
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_duplicate_name_is_insert_failure(pool: PgPool) -> sqlx::Result<()> {
        handle(pool.clone(), CreatePlayerCommand::new("Ann", "SS"))
            .await
            .unwrap();

        let result = handle(pool.clone(), CreatePlayerCommand::new("Ann", "CF")).await;
        let err = result.unwrap_err();
        assert!(matches!(err, CreatePlayerError::InsertFailed(_)));
        assert_eq!(err.to_string(), "Could not add player. Name might already exist.");
        Ok(())
    }
}
