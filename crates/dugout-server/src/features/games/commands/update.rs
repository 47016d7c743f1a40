use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::create::{validate_game_fields, GameFields, GameFieldsError};
use crate::models::Game;

/// Full replacement of a game's fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGameCommand {
    #[serde(skip)]
    pub id: i32,
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub location: Option<String>,
    pub result: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateGameError {
    #[error(transparent)]
    Validation(#[from] GameFieldsError),
    #[error("Game with ID {0} not found.")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateGameCommand {
    pub fn validate(&self) -> Result<GameFields<'_>, UpdateGameError> {
        Ok(validate_game_fields(
            self.date.as_deref(),
            self.opponent.as_deref(),
            self.location.as_deref(),
            self.result.as_deref(),
        )?)
    }
}

#[tracing::instrument(skip(pool, command), fields(game_id = command.id))]
pub async fn handle(pool: PgPool, command: UpdateGameCommand) -> Result<Game, UpdateGameError> {
    let fields = command.validate()?;

    let game = sqlx::query_as::<_, Game>(
        r#"
        UPDATE games
        SET date = $1, opponent = $2, location = $3, result = $4
        WHERE id = $5
        RETURNING id, date, opponent, location, result
        "#,
    )
    .bind(fields.date)
    .bind(fields.opponent)
    .bind(fields.location)
    .bind(fields.result)
    .bind(command.id)
    .fetch_optional(&pool)
    .await?;

    game.ok_or(UpdateGameError::NotFound(command.id))
}
