use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::shared::validation::non_empty;
use crate::models::Player;

/// Full replacement of a player's name and position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlayerCommand {
    #[serde(skip)]
    pub id: i32,
    pub name: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdatePlayerError {
    #[error("Name and position are required.")]
    MissingFields,
    #[error("Player with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdatePlayerCommand {
    pub fn validate(&self) -> Result<(&str, &str), UpdatePlayerError> {
        match (non_empty(self.name.as_deref()), non_empty(self.position.as_deref())) {
            (Some(name), Some(position)) => Ok((name, position)),
            _ => Err(UpdatePlayerError::MissingFields),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(player_id = command.id))]
pub async fn handle(pool: PgPool, command: UpdatePlayerCommand) -> Result<Player, UpdatePlayerError> {
    let (name, position) = command.validate()?;

    let player = sqlx::query_as::<_, Player>(
        r#"
        UPDATE players
        SET name = $1, position = $2
        WHERE id = $3
        RETURNING id, name, position
        "#,
    )
    .bind(name)
    .bind(position)
    .bind(command.id)
    .fetch_optional(&pool)
    .await?;

    player.ok_or(UpdatePlayerError::NotFound(command.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestPlayer;

    fn command(id: i32, name: &str, position: &str) -> UpdatePlayerCommand {
        UpdatePlayerCommand {
            id,
            name: Some(name.to_string()),
            position: Some(position.to_string()),
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_replaces_fields(pool: PgPool) -> sqlx::Result<()> {
        let ann = TestPlayer::new("Ann", "SS").insert(&pool).await?;

        let updated = handle(pool.clone(), command(ann.id, "Ann B", "2B")).await.unwrap();
        assert_eq!(updated.id, ann.id);
        assert_eq!(updated.name, "Ann B");
        assert_eq!(updated.position, "2B");
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_missing_player(pool: PgPool) -> sqlx::Result<()> {
        let result = handle(pool.clone(), command(404, "Nobody", "C")).await;
        assert!(matches!(result, Err(UpdatePlayerError::NotFound(404))));
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_duplicate_name_is_database_error(pool: PgPool) -> sqlx::Result<()> {
        TestPlayer::new("Ann", "SS").insert(&pool).await?;
        let bo = TestPlayer::new("Bo", "CF").insert(&pool).await?;

        let result = handle(pool.clone(), command(bo.id, "Ann", "CF")).await;
        assert!(matches!(result, Err(UpdatePlayerError::Database(_))));
        Ok(())
    }

    #[test]
    fn test_validation_requires_both_fields() {
        let cmd = UpdatePlayerCommand {
            id: 1,
            name: Some("Ann".to_string()),
            position: None,
        };
        assert!(matches!(cmd.validate(), Err(UpdatePlayerError::MissingFields)));
    }
}
