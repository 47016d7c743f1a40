//! Player API routes
//!
//! # Route Structure
//!
//! - `GET /players` - List players
//! - `POST /players` - Create a player
//! - `GET /players/:id` - Get a single player
//! - `PUT /players/:id` - Replace a player's name and position
//! - `DELETE /players/:id` - Delete a player
//! - `GET /players/:id/stats` - Career line for a player

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
        CreatePlayerCommand, CreatePlayerError, DeletePlayerCommand, DeletePlayerError,
        UpdatePlayerCommand, UpdatePlayerError,
    },
    queries::{GetPlayerError, GetPlayerQuery, ListPlayersError},
};
use crate::api::response::{ErrorResponse, JsonBody, MessageResponse, PathParams};
use crate::features::aggregates::queries::career::{self, CareerError, CareerQuery};

// ============================================================================
// Router Configuration
// ============================================================================

pub fn players_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_players).post(create_player))
        .route("/:id", get(get_player).put(update_player).delete(delete_player))
        .route("/:id/stats", get(get_career))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a new player
///
/// # Endpoint
///
/// `POST /players`
///
/// # Request Body
///
/// ```json
/// { "name": "Ann", "position": "SS" }
/// ```
///
/// # Response
///
/// - `201 Created` - `{message, player}`
/// - `400 Bad Request` - Missing name/position, or the insert failed (e.g. duplicate name)
#[tracing::instrument(skip(pool, command))]
async fn create_player(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreatePlayerCommand>,
) -> Result<Response, PlayerApiError> {
    let player = super::commands::create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_record("Player added successfully!", "player", player)),
    )
        .into_response())
}

/// Replace a player's name and position
///
/// # Endpoint
///
/// `PUT /players/:id`
///
/// # Response
///
/// - `200 OK` - `{message, player}`
/// - `400 Bad Request` - Missing name/position
/// - `404 Not Found` - Player not found
/// - `500 Internal Server Error` - Database error (including a name clash)
#[tracing::instrument(skip(pool, command), fields(player_id = id))]
async fn update_player(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
    JsonBody(mut command): JsonBody<UpdatePlayerCommand>,
) -> Result<Response, PlayerApiError> {
    command.id = id;
    let player = super::commands::update::handle(pool, command).await?;

    Ok(Json(MessageResponse::with_record("Player updated successfully.", "player", player))
        .into_response())
}

/// Delete a player
///
/// # Endpoint
///
/// `DELETE /players/:id`
///
/// # Response
///
/// - `200 OK` - `{message, player}` with the deleted row
/// - `404 Not Found` - Player not found
#[tracing::instrument(skip(pool), fields(player_id = id))]
async fn delete_player(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
) -> Result<Response, PlayerApiError> {
    let player = super::commands::delete::handle(pool, DeletePlayerCommand { id }).await?;

    Ok(Json(MessageResponse::with_record("Player deleted successfully.", "player", player))
        .into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// List all players ordered by id
///
/// # Endpoint
///
/// `GET /players`
#[tracing::instrument(skip(pool))]
async fn list_players(State(pool): State<PgPool>) -> Result<Response, PlayerApiError> {
    let players = super::queries::list::handle(pool).await?;
    tracing::debug!(count = players.len(), "Players listed via API");
    Ok(Json(players).into_response())
}

/// Get a single player
///
/// # Endpoint
///
/// `GET /players/:id`
///
/// # Response
///
/// - `200 OK` - `{id, name, position}`
/// - `404 Not Found` - Player not found
#[tracing::instrument(skip(pool), fields(player_id = id))]
async fn get_player(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
) -> Result<Response, PlayerApiError> {
    let player = super::queries::get::handle(pool, GetPlayerQuery { id }).await?;
    Ok(Json(player).into_response())
}

/// Career line for a player
///
/// # Endpoint
///
/// `GET /players/:id/stats`
///
/// # Response
///
/// - `200 OK` - `{name, games_played, total_hits, total_home_runs, avg_at_bats, batting_average}`
/// - `404 Not Found` - Player not found
#[tracing::instrument(skip(pool), fields(player_id = id))]
async fn get_career(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
) -> Result<Response, PlayerApiError> {
    let line = career::handle(pool, CareerQuery { player_id: id }).await?;
    Ok(Json(line).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for player API endpoints
#[derive(Debug)]
enum PlayerApiError {
    Create(CreatePlayerError),
    Update(UpdatePlayerError),
    Delete(DeletePlayerError),
    Get(GetPlayerError),
    List(ListPlayersError),
    Career(CareerError),
}

impl From<CreatePlayerError> for PlayerApiError {
    fn from(err: CreatePlayerError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdatePlayerError> for PlayerApiError {
    fn from(err: UpdatePlayerError) -> Self {
        Self::Update(err)
    }
}

impl From<DeletePlayerError> for PlayerApiError {
    fn from(err: DeletePlayerError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetPlayerError> for PlayerApiError {
    fn from(err: GetPlayerError) -> Self {
        Self::Get(err)
    }
}

impl From<ListPlayersError> for PlayerApiError {
    fn from(err: ListPlayersError) -> Self {
        Self::List(err)
    }
}

impl From<CareerError> for PlayerApiError {
    fn from(err: CareerError) -> Self {
        Self::Career(err)
    }
}

impl IntoResponse for PlayerApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PlayerApiError::Create(err) => {
                if let CreatePlayerError::InsertFailed(ref source) = err {
                    tracing::error!(error = ?source, "Player insert failed");
                }
                (StatusCode::BAD_REQUEST, err.to_string())
            },

            PlayerApiError::Update(err @ UpdatePlayerError::MissingFields) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            },
            PlayerApiError::Update(UpdatePlayerError::NotFound(id))
            | PlayerApiError::Delete(DeletePlayerError::NotFound(id))
            | PlayerApiError::Get(GetPlayerError::NotFound(id))
            | PlayerApiError::Career(CareerError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Player with ID {id} not found."))
            },

            PlayerApiError::Update(UpdatePlayerError::Database(e))
            | PlayerApiError::Delete(DeletePlayerError::Database(e))
            | PlayerApiError::Get(GetPlayerError::Database(e))
            | PlayerApiError::List(ListPlayersError::Database(e))
            | PlayerApiError::Career(CareerError::Database(e)) => {
                tracing::error!(error = ?e, "Database error in player endpoint");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            },
        };

        ErrorResponse::new(message).with_status(status)
    }
}
