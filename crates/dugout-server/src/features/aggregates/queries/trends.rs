//! Per-date, per-player trend series
//!
//! Each series sums one player's lines per game date, so two games on the same
//! date merge into a single point. Points come back ordered by date, then
//! player name.
//!
//! Wire shape of each point: `{"date": ..., "player_name": ..., <column>: value}`
//! where `<column>` is [`TrendMetric::column`].

use chrono::NaiveDate;
use dugout_common::stats::{TrendMetric, ValueKind};
use serde::ser::{Serialize, SerializeMap, Serializer};
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Debug, Clone, Copy)]
pub struct TrendQuery {
    pub metric: TrendMetric,
    /// Restrict the series to one player
    pub player_id: Option<i32>,
}

impl TrendQuery {
    pub fn all_players(metric: TrendMetric) -> Self {
        Self {
            metric,
            player_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrendValue {
    Count(i64),
    Rate(f64),
    /// Slugging, pre-formatted to three decimals
    Formatted(String),
}

impl Serialize for TrendValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TrendValue::Count(n) => serializer.serialize_i64(*n),
            TrendValue::Rate(x) => serializer.serialize_f64(*x),
            TrendValue::Formatted(s) => serializer.serialize_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub player_name: String,
    pub metric: TrendMetric,
    pub value: TrendValue,
}

impl Serialize for TrendPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("date", &self.date)?;
        map.serialize_entry("player_name", &self.player_name)?;
        map.serialize_entry(self.metric.column(), &self.value)?;
        map.end()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const OBP_RAW: &str = "SUM(s.hits + s.walks + s.hit_by_pitch)::FLOAT8 \
     / NULLIF(SUM(s.at_bats + s.walks + s.hit_by_pitch + s.sacrifice_flies), 0)";

const SLUGGING_RAW: &str = "SUM(s.hits + 2 * s.doubles + 3 * s.triples + 4 * s.home_runs)::FLOAT8 \
     / NULLIF(SUM(s.at_bats), 0)";

fn summed(column: &str) -> String {
    format!("COALESCE(SUM(s.{column}), 0)::BIGINT")
}

/// SQL expression producing the metric value for one (date, player) group
fn value_expr(metric: TrendMetric) -> String {
    match metric {
        TrendMetric::BattingAverage => {
            "COALESCE(ROUND(SUM(s.hits)::NUMERIC / NULLIF(SUM(s.at_bats), 0), 3), 0)::FLOAT8"
                .to_string()
        },
        TrendMetric::OnBasePercentage => "COALESCE(ROUND(\
             SUM(s.hits + s.walks + s.hit_by_pitch)::NUMERIC \
             / NULLIF(SUM(s.at_bats + s.walks + s.hit_by_pitch + s.sacrifice_flies), 0), \
             3), 0)::FLOAT8"
            .to_string(),
        TrendMetric::Slugging => format!("COALESCE({SLUGGING_RAW}, 0)"),
        TrendMetric::Ops => format!("COALESCE({OBP_RAW}, 0) + COALESCE({SLUGGING_RAW}, 0)"),
        TrendMetric::Runs => summed("runs"),
        TrendMetric::Rbis => summed("rbis"),
        TrendMetric::StolenBases => summed("stolen_bases"),
        TrendMetric::Strikeouts => summed("strikeouts"),
        TrendMetric::Walks => summed("walks"),
        TrendMetric::HitByPitch => summed("hit_by_pitch"),
        TrendMetric::SacrificeFlies => summed("sacrifice_flies"),
    }
}

pub fn build_query(query: &TrendQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT g.date, p.name AS player_name, ");
    qb.push(value_expr(query.metric));
    qb.push(
        " AS value \
         FROM stats s \
         JOIN games g ON s.game_id = g.id \
         JOIN players p ON s.player_id = p.id",
    );

    if let Some(player_id) = query.player_id {
        qb.push(" WHERE s.player_id = ").push_bind(player_id);
    }

    qb.push(" GROUP BY g.date, p.name ORDER BY g.date, p.name");
    qb
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: TrendQuery) -> Result<Vec<TrendPoint>, TrendError> {
    let metric = query.metric;
    let mut qb = build_query(&query);

    let points = match metric.kind() {
        ValueKind::Count => qb
            .build_query_as::<(NaiveDate, String, i64)>()
            .fetch_all(&pool)
            .await?
            .into_iter()
            .map(|(date, player_name, n)| TrendPoint {
                date,
                player_name,
                metric,
                value: TrendValue::Count(n),
            })
            .collect::<Vec<_>>(),
        kind @ (ValueKind::Rate | ValueKind::Formatted) => qb
            .build_query_as::<(NaiveDate, String, f64)>()
            .fetch_all(&pool)
            .await?
            .into_iter()
            .map(|(date, player_name, x)| TrendPoint {
                date,
                player_name,
                metric,
                value: if kind == ValueKind::Formatted {
                    TrendValue::Formatted(format!("{x:.3}"))
                } else {
                    TrendValue::Rate(x)
                },
            })
            .collect(),
    };

    tracing::debug!(%metric, points = points.len(), "Trend series computed");
    Ok(points)
}
