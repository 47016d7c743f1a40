//! API request and response types
//!
//! Matches the JSON the Dugout server emits. Numeric aggregates arrive as
//! plain numbers; trend rows keep their metric value as raw JSON because its
//! shape depends on the metric.

use chrono::NaiveDate;
use dugout_common::stats::{StatLine, TrendMetric};
use serde::{Deserialize, Serialize};

/// Failure body returned by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Mutation response: `{"message": ..., "<player|game|stats|stat>": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse<T> {
    pub message: String,
    #[serde(alias = "player", alias = "game", alias = "stats", alias = "stat")]
    pub record: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i32,
    pub date: NaiveDate,
    pub opponent: String,
    pub location: Option<String>,
    pub result: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGame {
    pub date: String,
    pub opponent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// A stored stat line; references are null once the player or game is deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: i32,
    pub player_id: Option<i32>,
    pub game_id: Option<i32>,
    #[serde(flatten)]
    pub line: StatLine,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewStat {
    pub player_id: i32,
    pub game_id: i32,
    #[serde(flatten)]
    pub line: StatLine,
}

/// Filters for `GET /stats`, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

/// One row of the joined stat listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub games_played: i64,
    pub total_hits: i64,
    pub total_home_runs: i64,
    pub total_runs: i64,
    pub avg_at_bats: f64,
    pub batting_average: f64,
    pub on_base_percentage: f64,
}

/// Career totals for one player (`GET /players/:id/stats`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerLine {
    pub name: String,
    pub games_played: i64,
    pub total_hits: i64,
    pub total_home_runs: i64,
    pub avg_at_bats: f64,
    pub batting_average: f64,
}

/// One (date, player) point of a trend series
///
/// The value sits under the metric's column name, e.g. `total_runs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendRow {
    pub date: NaiveDate,
    pub player_name: String,
    #[serde(flatten)]
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl TrendRow {
    pub fn value(&self, metric: TrendMetric) -> Option<&serde_json::Value> {
        self.values.get(metric.column())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterUploadSummary {
    pub message: String,
    pub players_added: u64,
    pub rows_processed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsUploadSummary {
    pub message: String,
    pub total: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_response_picks_record_key() {
        let created: MessageResponse<Player> = serde_json::from_value(json!({
            "message": "Player added successfully!",
            "player": { "id": 1, "name": "Ann", "position": "SS" }
        }))
        .unwrap();
        assert_eq!(created.record.unwrap().name, "Ann");

        let deleted: MessageResponse<Stat> =
            serde_json::from_value(json!({ "message": "Stat deleted successfully" })).unwrap();
        assert!(deleted.record.is_none());
    }

    #[test]
    fn test_stat_filters_skip_unset() {
        let filters = StatFilters {
            player_id: Some(3),
            sort_by: Some("hits".to_string()),
            ..StatFilters::default()
        };
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!({ "player_id": 3, "sort_by": "hits" })
        );
    }

    #[test]
    fn test_trend_row_value_by_metric() {
        let row: TrendRow = serde_json::from_value(json!({
            "date": "2024-04-01",
            "player_name": "Ann",
            "slugging_percentage": "1.500"
        }))
        .unwrap();
        assert_eq!(row.value(TrendMetric::Slugging), Some(&json!("1.500")));
        assert_eq!(row.value(TrendMetric::Runs), None);
    }

    #[test]
    fn test_new_stat_is_flat() {
        let body = NewStat {
            player_id: 1,
            game_id: 2,
            line: StatLine {
                at_bats: 4,
                ..StatLine::default()
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["player_id"], 1);
        assert_eq!(value["at_bats"], 4);
        assert_eq!(value["stolen_bases"], 0);
    }
}
