//! Game API routes
//!
//! - `GET /games` - List games, most recent first
//! - `POST /games` - Create a game
//! - `GET /games/:id` - Get a single game
//! - `PUT /games/:id` - Replace a game
//! - `DELETE /games/:id` - Delete a game

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::{
    commands::{
        CreateGameCommand, CreateGameError, DeleteGameCommand, DeleteGameError, UpdateGameCommand,
        UpdateGameError,
    },
    queries::{GetGameError, GetGameQuery, ListGamesError},
};
use crate::api::response::{ErrorResponse, JsonBody, MessageResponse, PathParams};

pub fn games_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_games).post(create_game))
        .route("/:id", get(get_game).put(update_game).delete(delete_game))
}

/// Create a new game
///
/// # Endpoint
///
/// `POST /games`
///
/// # Request Body
///
/// ```json
/// { "date": "2024-04-01", "opponent": "Rivals", "location": "Home", "result": null }
/// ```
///
/// # Response
///
/// - `201 Created` - `{message, game}`
/// - `400 Bad Request` - Missing date/opponent or unparseable date
/// - `500 Internal Server Error` - Insert failed
#[tracing::instrument(skip(pool, command))]
async fn create_game(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateGameCommand>,
) -> Result<Response, GameApiError> {
    let game = super::commands::create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_record("Game added successfully!", "game", game)),
    )
        .into_response())
}

/// Replace a game
///
/// # Response
///
/// - `200 OK` - `{message, game}`
/// - `400 Bad Request` - Missing date/opponent or unparseable date
/// - `404 Not Found` - Game not found
#[tracing::instrument(skip(pool, command), fields(game_id = id))]
async fn update_game(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
    JsonBody(mut command): JsonBody<UpdateGameCommand>,
) -> Result<Response, GameApiError> {
    command.id = id;
    let game = super::commands::update::handle(pool, command).await?;

    Ok(Json(MessageResponse::with_record("Game updated successfully.", "game", game)).into_response())
}

/// Delete a game
///
/// # Response
///
/// - `200 OK` - `{message, game}` with the deleted row
/// - `404 Not Found` - Game not found
#[tracing::instrument(skip(pool), fields(game_id = id))]
async fn delete_game(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
) -> Result<Response, GameApiError> {
    let game = super::commands::delete::handle(pool, DeleteGameCommand { id }).await?;

    Ok(Json(MessageResponse::with_record("Game deleted successfully.", "game", game)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_games(State(pool): State<PgPool>) -> Result<Response, GameApiError> {
    let games = super::queries::list::handle(pool).await?;
    Ok(Json(games).into_response())
}

#[tracing::instrument(skip(pool), fields(game_id = id))]
async fn get_game(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
) -> Result<Response, GameApiError> {
    let game = super::queries::get::handle(pool, GetGameQuery { id }).await?;
    Ok(Json(game).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum GameApiError {
    Create(CreateGameError),
    Update(UpdateGameError),
    Delete(DeleteGameError),
    Get(GetGameError),
    List(ListGamesError),
}

impl From<CreateGameError> for GameApiError {
    fn from(err: CreateGameError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateGameError> for GameApiError {
    fn from(err: UpdateGameError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteGameError> for GameApiError {
    fn from(err: DeleteGameError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetGameError> for GameApiError {
    fn from(err: GetGameError) -> Self {
        Self::Get(err)
    }
}

impl From<ListGamesError> for GameApiError {
    fn from(err: ListGamesError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for GameApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GameApiError::Create(CreateGameError::Validation(err))
            | GameApiError::Update(UpdateGameError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            },
            GameApiError::Create(err @ CreateGameError::Database(_)) => {
                tracing::error!(error = ?err, "Game insert failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            },

            GameApiError::Update(UpdateGameError::NotFound(id))
            | GameApiError::Delete(DeleteGameError::NotFound(id))
            | GameApiError::Get(GetGameError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Game with ID {id} not found."))
            },

            GameApiError::Update(UpdateGameError::Database(e))
            | GameApiError::Delete(DeleteGameError::Database(e))
            | GameApiError::Get(GetGameError::Database(e))
            | GameApiError::List(ListGamesError::Database(e)) => {
                tracing::error!(error = ?e, "Database error in game endpoint");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            },
        };

        ErrorResponse::new(message).with_status(status)
    }
}
