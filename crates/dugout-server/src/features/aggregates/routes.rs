//! Aggregate API routes, mounted under `/stats`
//!
//! - `GET /stats/leaderboard` - Per-player totals ranked by OBP
//! - `GET /stats/compare/:player1/:player2` - Two career lines side by side
//! - `GET /stats/all_players/:metric` - Trend series for every player
//! - `GET /stats/player/:player_id/games` - Batting-average trend for one player
//!
//! The career line (`GET /players/:id/stats`) is served from the player routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dugout_common::stats::TrendMetric;
use sqlx::PgPool;

use super::queries::{
    compare, leaderboard, trends, CompareError, CompareQuery, LeaderboardError, TrendError,
    TrendQuery,
};
use crate::api::response::{ErrorResponse, PathParams};

pub fn aggregate_routes() -> Router<PgPool> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/compare/:player1/:player2", get(compare_players))
        .route("/all_players/:metric", get(all_players_trend))
        .route("/player/:player_id/games", get(player_trend))
}

/// # Response
///
/// - `200 OK` - `[{name, games_played, total_hits, total_home_runs, total_runs,
///   avg_at_bats, batting_average, on_base_percentage}]`
#[tracing::instrument(skip(pool))]
async fn get_leaderboard(State(pool): State<PgPool>) -> Result<Response, AggregateApiError> {
    let rows = leaderboard::handle(pool).await?;
    Ok(Json(rows).into_response())
}

/// # Response
///
/// - `200 OK` - Two career lines, `player1` first
/// - `404 Not Found` - Either player is unknown (or both ids are the same)
#[tracing::instrument(skip(pool))]
async fn compare_players(
    State(pool): State<PgPool>,
    PathParams((player1, player2)): PathParams<(i32, i32)>,
) -> Result<Response, AggregateApiError> {
    let rows = compare::handle(pool, CompareQuery { player1, player2 }).await?;
    Ok(Json(rows).into_response())
}

/// `metric` is one of `games` (batting average), `slugging`, `obp`, `ops`,
/// `runs`, `rbis`, `stolen_bases`, `strikeouts`, `walks`, `hbp`,
/// `sacrifice_flies`.
#[tracing::instrument(skip(pool))]
async fn all_players_trend(
    State(pool): State<PgPool>,
    PathParams(metric): PathParams<String>,
) -> Result<Response, AggregateApiError> {
    let metric = TrendMetric::ALL
        .into_iter()
        .find(|m| m.path_segment() == metric)
        .ok_or(AggregateApiError::UnknownMetric(metric))?;

    let points = trends::handle(pool, TrendQuery::all_players(metric)).await?;
    Ok(Json(points).into_response())
}

#[tracing::instrument(skip(pool))]
async fn player_trend(
    State(pool): State<PgPool>,
    PathParams(player_id): PathParams<i32>,
) -> Result<Response, AggregateApiError> {
    let query = TrendQuery {
        metric: TrendMetric::BattingAverage,
        player_id: Some(player_id),
    };
    let points = trends::handle(pool, query).await?;
    Ok(Json(points).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AggregateApiError {
    Leaderboard(LeaderboardError),
    Compare(CompareError),
    Trend(TrendError),
    UnknownMetric(String),
}

impl From<LeaderboardError> for AggregateApiError {
    fn from(err: LeaderboardError) -> Self {
        Self::Leaderboard(err)
    }
}

impl From<CompareError> for AggregateApiError {
    fn from(err: CompareError) -> Self {
        Self::Compare(err)
    }
}

impl From<TrendError> for AggregateApiError {
    fn from(err: TrendError) -> Self {
        Self::Trend(err)
    }
}

impl IntoResponse for AggregateApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AggregateApiError::Compare(err @ CompareError::NotFound) => {
                (StatusCode::NOT_FOUND, err.to_string())
            },
            AggregateApiError::UnknownMetric(segment) => {
                (StatusCode::NOT_FOUND, format!("Unknown trend metric '{segment}'."))
            },
            AggregateApiError::Compare(CompareError::Database(e)) => {
                tracing::error!(error = ?e, "Player comparison failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            },
            AggregateApiError::Leaderboard(LeaderboardError::Database(e))
            | AggregateApiError::Trend(TrendError::Database(e)) => {
                tracing::error!(error = ?e, "Aggregate query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        ErrorResponse::new(message).with_status(status)
    }
}
