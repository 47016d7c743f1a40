//! Database error handling utilities
//!
//! Lets commands have the schema enforce references in the same statement that
//! writes, instead of checking first.
//!
//! # Examples
//!
//! ```rust,ignore
//! use dugout_server::features::shared::error_helpers::{violated_foreign_key, STATS_PLAYER_FK};
//!
//! .map_err(|e| match violated_foreign_key(&e) {
//!     Some(STATS_PLAYER_FK) => CreateStatError::PlayerMissing(player_id),
//!     _ => CreateStatError::Database(e),
//! })?;
//! ```

use sqlx::Error as SqlxError;

/// Foreign key from `stats.player_id` to `players.id`
pub const STATS_PLAYER_FK: &str = "stats_player_id_fkey";

/// Foreign key from `stats.game_id` to `games.id`
pub const STATS_GAME_FK: &str = "stats_game_id_fkey";

/// Name of the violated foreign key constraint, if the error is one
pub fn violated_foreign_key(error: &SqlxError) -> Option<&str> {
    match error {
        SqlxError::Database(db_err) if db_err.is_foreign_key_violation() => db_err.constraint(),
        _ => None,
    }
}
