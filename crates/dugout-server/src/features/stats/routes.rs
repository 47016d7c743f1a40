//! Stat line API routes
//!
//! - `GET /stats` - Filtered listing joined with player and game
//! - `POST /stats` - Record a line
//! - `GET /stats/:id` - Get a single line
//! - `PUT /stats/:id` - Replace a line
//! - `DELETE /stats/:id` - Delete a line
//!
//! The aggregate endpoints under `/stats` are merged in from
//! [`crate::features::aggregates`].

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::{
    commands::{
        CreateStatCommand, CreateStatError, DeleteStatCommand, DeleteStatError, UpdateStatCommand,
        UpdateStatError,
    },
    queries::{GetStatError, GetStatQuery, ListStatsError, ListStatsQuery},
};
use crate::api::response::{ErrorResponse, JsonBody, MessageResponse, PathParams};

// ============================================================================
// Router Configuration
// ============================================================================

pub fn stats_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_stats).post(create_stat))
        .route("/:id", get(get_stat).put(update_stat).delete(delete_stat))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Record one player's line for one game
///
/// # Endpoint
///
/// `POST /stats`
///
/// # Request Body
///
/// ```json
/// { "player_id": 1, "game_id": 1, "at_bats": 4, "hits": 2, "walks": 1, "home_runs": 1 }
/// ```
///
/// Omitted counting fields are stored as 0.
///
/// # Response
///
/// - `201 Created` - `{message, stats}`
/// - `400 Bad Request` - Missing ids, negative values, hits above at-bats,
///   or an unknown player/game
/// - `500 Internal Server Error` - Insert failed
#[tracing::instrument(skip(pool, command))]
async fn create_stat(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateStatCommand>,
) -> Result<Response, StatApiError> {
    let stat = super::commands::create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_record("Player stats recorded successfully!", "stats", stat)),
    )
        .into_response())
}

/// Replace a stat line
///
/// # Response
///
/// - `200 OK` - `{message, stat}`
/// - `400 Bad Request` - Missing ids or negative values
/// - `404 Not Found` - Stat line not found
#[tracing::instrument(skip(pool, command), fields(stat_id = id))]
async fn update_stat(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
    JsonBody(mut command): JsonBody<UpdateStatCommand>,
) -> Result<Response, StatApiError> {
    command.id = id;
    let stat = super::commands::update::handle(pool, command).await?;

    Ok(Json(MessageResponse::with_record("Stat entry updated successfully.", "stat", stat))
        .into_response())
}

/// Delete a stat line
///
/// # Response
///
/// - `200 OK` - `{message}`
/// - `404 Not Found` - Stat line not found
#[tracing::instrument(skip(pool), fields(stat_id = id))]
async fn delete_stat(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
) -> Result<Response, StatApiError> {
    super::commands::delete::handle(pool, DeleteStatCommand { id }).await?;

    Ok(Json(MessageResponse::<()>::message_only("Stat deleted successfully")).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// List stat lines
///
/// # Endpoint
///
/// `GET /stats?player_id=1&start_date=2024-04-01&sort_by=hits`
///
/// # Query Parameters
///
/// - `player_id`, `game_id` - Exact match
/// - `start_date`, `end_date` - Inclusive game date window
/// - `sort_by` - `hits` or `home_runs` (descending); anything else sorts by date descending
#[tracing::instrument(skip(pool))]
async fn list_stats(
    State(pool): State<PgPool>,
    Query(query): Query<ListStatsQuery>,
) -> Result<Response, StatApiError> {
    let rows = super::queries::list::handle(pool, query).await?;
    Ok(Json(rows).into_response())
}

#[tracing::instrument(skip(pool), fields(stat_id = id))]
async fn get_stat(
    State(pool): State<PgPool>,
    PathParams(id): PathParams<i32>,
) -> Result<Response, StatApiError> {
    let stat = super::queries::get::handle(pool, GetStatQuery { id }).await?;
    Ok(Json(stat).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum StatApiError {
    Create(CreateStatError),
    Update(UpdateStatError),
    Delete(DeleteStatError),
    Get(GetStatError),
    List(ListStatsError),
}

impl From<CreateStatError> for StatApiError {
    fn from(err: CreateStatError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateStatError> for StatApiError {
    fn from(err: UpdateStatError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteStatError> for StatApiError {
    fn from(err: DeleteStatError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetStatError> for StatApiError {
    fn from(err: GetStatError) -> Self {
        Self::Get(err)
    }
}

impl From<ListStatsError> for StatApiError {
    fn from(err: ListStatsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for StatApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            StatApiError::Create(CreateStatError::Database(e)) => {
                tracing::error!(error = ?e, "Stat insert failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Could not add player stats.".to_string())
            },
            StatApiError::Create(err) => (StatusCode::BAD_REQUEST, err.to_string()),

            StatApiError::Update(
                err @ (UpdateStatError::MissingIds
                | UpdateStatError::Negative
                | UpdateStatError::PlayerMissing(_)
                | UpdateStatError::GameMissing(_)),
            ) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            },
            StatApiError::Update(err @ UpdateStatError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            },
            StatApiError::Update(err @ UpdateStatError::Database(_)) => {
                tracing::error!(error = ?err, "Stat update failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            },

            StatApiError::Delete(err @ DeleteStatError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            },
            StatApiError::Delete(err @ DeleteStatError::Database(_)) => {
                tracing::error!(error = ?err, "Stat delete failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            },

            StatApiError::Get(err @ GetStatError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            },
            StatApiError::List(err @ (ListStatsError::InvalidId { .. } | ListStatsError::InvalidDate(_))) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            },
            StatApiError::Get(GetStatError::Database(e)) | StatApiError::List(ListStatsError::Database(e)) => {
                tracing::error!(error = ?e, "Database error in stat endpoint");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            },
        };

        ErrorResponse::new(message).with_status(status)
    }
}
