//! Dugout Server Library
//!
//! REST API for a baseball team's roster, schedule and per-game stat lines.
//!
//! # Overview
//!
//! - **API Endpoints**: CRUD for players, games and stat lines, plus read-only
//!   aggregates (leaderboard, comparisons, per-date trend series)
//! - **CSV Import**: bulk roster and stat uploads, each applied in one transaction
//! - **Database Management**: PostgreSQL via SQLx; derived stats are computed in SQL on read
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS, request tracing, compression and the admin token policy
//!
//! # Architecture
//!
//! Features are vertical slices under [`features`]. Write operations live in
//! `commands/`, reads in `queries/`; each exposes a plain `handle` function that
//! takes the pool and a request struct. Route modules translate per-command
//! `thiserror` enums into HTTP status codes and `{"error": "..."}` bodies.
//!
//! # Example
//!
//! ```no_run
//! use dugout_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::run_migrations(&pool).await?;
//!     api::serve(config, pool).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use error::{AppError, ServerResult};
