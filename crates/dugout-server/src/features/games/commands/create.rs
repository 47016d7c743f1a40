//! Create game command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::shared::validation::{non_empty, parse_game_date, DateValidationError};
use crate::models::Game;

/// Command to create a new game
///
/// `location` and `result` are optional; blank strings are stored as `NULL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGameCommand {
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub location: Option<String>,
    pub result: Option<String>,
}

/// Validated game fields shared by create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFields<'a> {
    pub date: NaiveDate,
    pub opponent: &'a str,
    pub location: Option<&'a str>,
    pub result: Option<&'a str>,
}

/// Reasons a game body is rejected before it reaches the database
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GameFieldsError {
    #[error("Date and opponent are required.")]
    MissingFields,
    #[error(transparent)]
    InvalidDate(#[from] DateValidationError),
}

/// Validate the four game fields
pub fn validate_game_fields<'a>(
    date: Option<&'a str>,
    opponent: Option<&'a str>,
    location: Option<&'a str>,
    result: Option<&'a str>,
) -> Result<GameFields<'a>, GameFieldsError> {
    let (Some(date), Some(opponent)) = (non_empty(date), non_empty(opponent)) else {
        return Err(GameFieldsError::MissingFields);
    };

    Ok(GameFields {
        date: parse_game_date(date)?,
        opponent,
        location: non_empty(location),
        result: non_empty(result),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CreateGameError {
    #[error(transparent)]
    Validation(#[from] GameFieldsError),
    #[error("Could not add game.")]
    Database(#[from] sqlx::Error),
}

impl CreateGameCommand {
    pub fn validate(&self) -> Result<GameFields<'_>, CreateGameError> {
        Ok(validate_game_fields(
            self.date.as_deref(),
            self.opponent.as_deref(),
            self.location.as_deref(),
            self.result.as_deref(),
        )?)
    }
}

#[tracing::instrument(skip(pool, command), fields(date = ?command.date, opponent = ?command.opponent))]
pub async fn handle(pool: PgPool, command: CreateGameCommand) -> Result<Game, CreateGameError> {
    let fields = command.validate()?;

    let game = sqlx::query_as::<_, Game>(
        r#"
        INSERT INTO games (date, opponent, location, result)
        VALUES ($1, $2, $3, $4)
        RETURNING id, date, opponent, location, result
        "#,
    )
    .bind(fields.date)
    .bind(fields.opponent)
    .bind(fields.location)
    .bind(fields.result)
    .fetch_one(&pool)
    .await?;

    tracing::info!(game_id = game.id, "Game created");

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(date: &str, opponent: &str) -> CreateGameCommand {
        CreateGameCommand {
            date: Some(date.to_string()),
            opponent: Some(opponent.to_string()),
            location: None,
            result: None,
        }
    }

    #[test]
    fn test_validation_requires_date_and_opponent() {
        assert!(matches!(
            CreateGameCommand::default().validate(),
            Err(CreateGameError::Validation(GameFieldsError::MissingFields))
        ));
        assert!(matches!(
            command("2024-04-01", " ").validate(),
            Err(CreateGameError::Validation(GameFieldsError::MissingFields))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_date() {
        assert!(matches!(
            command("April 1st", "Rivals").validate(),
            Err(CreateGameError::Validation(GameFieldsError::InvalidDate(_)))
        ));
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let cmd = CreateGameCommand {
            location: Some("".to_string()),
            result: Some("W 5-3".to_string()),
            ..command("2024-04-01", "Rivals")
        };
        let fields = cmd.validate().unwrap();
        assert_eq!(fields.location, None);
        assert_eq!(fields.result, Some("W 5-3"));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_game(pool: PgPool) -> sqlx::Result<()> {
        let game = handle(pool.clone(), command("2024-04-01", "Rivals")).await.unwrap();

        assert_eq!(game.date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(game.opponent, "Rivals");
        assert_eq!(game.location, None);
        Ok(())
    }
}
