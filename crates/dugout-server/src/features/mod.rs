//! Feature modules implementing the Dugout API
//!
//! Each feature is a vertical slice with its own commands, queries and routes.
//!
//! # Features
//!
//! - **players**: Roster management and the per-player career line
//! - **games**: Schedule management
//! - **stats**: Per-game stat lines with a filtered listing
//! - **aggregates**: Leaderboard, comparisons and per-date trend series
//! - **uploads**: CSV bulk import of rosters and stat lines
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list, aggregates)
//! - `routes.rs` - HTTP route definitions and the feature's API error mapping
//!
//! Handlers are plain `async fn handle(pool, request)` functions; routes call
//! them directly.

pub mod aggregates;
pub mod games;
pub mod players;
pub mod shared;
pub mod stats;
pub mod uploads;

use axum::Router;
use sqlx::PgPool;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// PostgreSQL connection pool for database operations
    pub db: PgPool,
    /// Request body cap for the CSV upload endpoints
    pub upload_limit_bytes: usize,
}

/// Creates the API router with all feature routes mounted
///
/// - `/players` - Roster
/// - `/games` - Schedule
/// - `/stats` - Stat lines plus the aggregate endpoints
/// - `/upload-roster`, `/upload-stats` - CSV import
pub fn router(state: FeatureState) -> Router<()> {
    let stats = stats::stats_routes().merge(aggregates::aggregate_routes());

    Router::new()
        .nest("/players", players::players_routes())
        .nest("/games", games::games_routes())
        .nest("/stats", stats)
        .merge(uploads::upload_routes(state.upload_limit_bytes))
        .with_state(state.db)
}
