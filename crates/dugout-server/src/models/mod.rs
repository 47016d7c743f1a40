//! Database models
//!
//! Rows as they come back from `players`, `games` and `stats`. Derived rates are
//! never stored; see the aggregates feature for those.

use chrono::NaiveDate;
use dugout_common::stats::StatLine;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};

/// Player model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub position: String,
}

/// Game model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i32,
    pub date: NaiveDate,
    pub opponent: String,
    pub location: Option<String>,
    pub result: Option<String>,
}

/// One player's line for one game
///
/// `player_id` and `game_id` become `NULL` when the referenced player or game
/// is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: i32,
    pub player_id: Option<i32>,
    pub game_id: Option<i32>,
    #[serde(flatten)]
    pub line: StatLine,
}

/// Column list for `SELECT`/`RETURNING` clauses that build a [`Stat`]
pub const STAT_COLUMNS: &str = "id, player_id, game_id, at_bats, hits, runs, rbis, home_runs, \
     walks, strikeouts, doubles, triples, hit_by_pitch, sacrifice_flies, stolen_bases";

impl<'r> FromRow<'r, PgRow> for Stat {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Stat {
            id: row.try_get("id")?,
            player_id: row.try_get("player_id")?,
            game_id: row.try_get("game_id")?,
            line: StatLine {
                at_bats: row.try_get("at_bats")?,
                hits: row.try_get("hits")?,
                runs: row.try_get("runs")?,
                rbis: row.try_get("rbis")?,
                home_runs: row.try_get("home_runs")?,
                walks: row.try_get("walks")?,
                strikeouts: row.try_get("strikeouts")?,
                doubles: row.try_get("doubles")?,
                triples: row.try_get("triples")?,
                hit_by_pitch: row.try_get("hit_by_pitch")?,
                sacrifice_flies: row.try_get("sacrifice_flies")?,
                stolen_bases: row.try_get("stolen_bases")?,
            },
        })
    }
}
