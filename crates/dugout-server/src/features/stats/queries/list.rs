//! Filtered stat listing
//!
//! `GET /stats?player_id=&game_id=&start_date=&end_date=&sort_by=`
//!
//! Every filter is optional; blank values are ignored. Rows whose player or
//! game has been deleted drop out of the join.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::features::shared::validation::{non_empty, parse_game_date, DateValidationError};

/// Query string for the stat listing
///
/// Taken as strings so that bad values produce the API's own 400 message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListStatsQuery {
    pub player_id: Option<String>,
    pub game_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<String>,
}

/// Sort order for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatSort {
    Hits,
    HomeRuns,
    #[default]
    DateDesc,
}

impl StatSort {
    /// Unknown keys fall back to date order
    pub fn parse(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            Some("hits") => StatSort::Hits,
            Some("home_runs") => StatSort::HomeRuns,
            _ => StatSort::DateDesc,
        }
    }

    fn order_by(self) -> &'static str {
        match self {
            StatSort::Hits => " ORDER BY stats.hits DESC, stats.id",
            StatSort::HomeRuns => " ORDER BY stats.home_runs DESC, stats.id",
            StatSort::DateDesc => " ORDER BY games.date DESC, stats.id",
        }
    }
}

/// Parsed filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatFilters {
    pub player_id: Option<i32>,
    pub game_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort: StatSort,
}

/// One row of the listing: the stat joined with player name and game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StatListItem {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub opponent: String,
    pub at_bats: i32,
    pub hits: i32,
    pub runs: i32,
    pub rbis: i32,
    pub home_runs: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum ListStatsError {
    #[error("Invalid {field} '{value}'. Expected an integer id.")]
    InvalidId { field: &'static str, value: String },
    #[error(transparent)]
    InvalidDate(#[from] DateValidationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn parse_id(field: &'static str, raw: Option<&str>) -> Result<Option<i32>, ListStatsError> {
    non_empty(raw)
        .map(|v| {
            v.parse::<i32>().map_err(|_| ListStatsError::InvalidId {
                field,
                value: v.to_string(),
            })
        })
        .transpose()
}

impl ListStatsQuery {
    pub fn validate(&self) -> Result<StatFilters, ListStatsError> {
        Ok(StatFilters {
            player_id: parse_id("player_id", self.player_id.as_deref())?,
            game_id: parse_id("game_id", self.game_id.as_deref())?,
            start_date: non_empty(self.start_date.as_deref()).map(parse_game_date).transpose()?,
            end_date: non_empty(self.end_date.as_deref()).map(parse_game_date).transpose()?,
            sort: StatSort::parse(self.sort_by.as_deref()),
        })
    }
}

/// Build the listing statement for `filters`
pub fn build_query(filters: &StatFilters) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new(
        r#"
        SELECT stats.id, players.name, games.date, games.opponent,
               stats.at_bats, stats.hits, stats.runs, stats.rbis, stats.home_runs
        FROM stats
        JOIN players ON stats.player_id = players.id
        JOIN games ON stats.game_id = games.id
        "#,
    );

    let mut keyword = " WHERE ";

    if let Some(player_id) = filters.player_id {
        qb.push(keyword).push("stats.player_id = ").push_bind(player_id);
        keyword = " AND ";
    }
    if let Some(game_id) = filters.game_id {
        qb.push(keyword).push("stats.game_id = ").push_bind(game_id);
        keyword = " AND ";
    }
    if let Some(start) = filters.start_date {
        qb.push(keyword).push("games.date >= ").push_bind(start);
        keyword = " AND ";
    }
    if let Some(end) = filters.end_date {
        qb.push(keyword).push("games.date <= ").push_bind(end);
    }

    qb.push(filters.sort.order_by());
    qb
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: ListStatsQuery) -> Result<Vec<StatListItem>, ListStatsError> {
    let filters = query.validate()?;

    let rows = build_query(&filters)
        .build_query_as::<StatListItem>()
        .fetch_all(&pool)
        .await?;

    tracing::debug!(count = rows.len(), "Stats listed");

    Ok(rows)
}
