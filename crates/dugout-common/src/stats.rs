//! Counting stats, rate-stat formulas and trend metrics
//!
//! The server computes every derived number in SQL. The functions here are the
//! same formulas expressed in Rust so the CLI can derive per-row values from a
//! plain stat listing and tests have an oracle to compare aggregates against.
//!
//! # Formulas
//!
//! - Batting average: `H / AB`, rounded to 3 decimals
//! - On-base percentage: `(H + BB + HBP) / (AB + BB + HBP + SF)`, rounded to 3 decimals
//! - Slugging: `(H + 2*2B + 3*3B + 4*HR) / AB`, formatted to exactly 3 decimals
//! - OPS: unrounded OBP plus unrounded slugging
//!
//! Every rate is 0 when its denominator is 0.
//!
//! OPS is re-derived from its components rather than summed from the rounded
//! OBP and slugging values, so `ops()` need not equal
//! `on_base_percentage() + slugging().parse()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DugoutError;

/// Round half away from zero to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Batting average rounded to 3 decimals
pub fn batting_average(hits: i64, at_bats: i64) -> f64 {
    round_to(ratio(hits, at_bats), 3)
}

/// One player's counting stats for one game (or a sum of games)
///
/// Missing fields deserialize as 0. The RBI field also accepts the `RBIs`
/// spelling used by older clients and CSV exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub at_bats: i32,
    pub hits: i32,
    pub runs: i32,
    #[serde(alias = "RBIs")]
    pub rbis: i32,
    pub home_runs: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub doubles: i32,
    pub triples: i32,
    pub hit_by_pitch: i32,
    pub sacrifice_flies: i32,
    pub stolen_bases: i32,
}

impl StatLine {
    /// Column names in schema order
    pub const FIELDS: [&'static str; 12] = [
        "at_bats",
        "hits",
        "runs",
        "rbis",
        "home_runs",
        "walks",
        "strikeouts",
        "doubles",
        "triples",
        "hit_by_pitch",
        "sacrifice_flies",
        "stolen_bases",
    ];

    /// Values in the same order as [`StatLine::FIELDS`]
    pub fn values(&self) -> [i32; 12] {
        [
            self.at_bats,
            self.hits,
            self.runs,
            self.rbis,
            self.home_runs,
            self.walks,
            self.strikeouts,
            self.doubles,
            self.triples,
            self.hit_by_pitch,
            self.sacrifice_flies,
            self.stolen_bases,
        ]
    }

    /// Inverse of [`StatLine::values`]
    pub fn from_values(v: [i32; 12]) -> Self {
        StatLine {
            at_bats: v[0],
            hits: v[1],
            runs: v[2],
            rbis: v[3],
            home_runs: v[4],
            walks: v[5],
            strikeouts: v[6],
            doubles: v[7],
            triples: v[8],
            hit_by_pitch: v[9],
            sacrifice_flies: v[10],
            stolen_bases: v[11],
        }
    }

    /// Name of the first field holding a negative value, if any
    pub fn first_negative(&self) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .find(|(_, value)| *value < 0)
            .map(|(name, _)| *name)
    }

    pub fn batting_average(&self) -> f64 {
        batting_average(self.hits.into(), self.at_bats.into())
    }

    fn on_base_raw(&self) -> f64 {
        let reached = i64::from(self.hits) + i64::from(self.walks) + i64::from(self.hit_by_pitch);
        let chances = i64::from(self.at_bats)
            + i64::from(self.walks)
            + i64::from(self.hit_by_pitch)
            + i64::from(self.sacrifice_flies);
        ratio(reached, chances)
    }

    fn slugging_raw(&self) -> f64 {
        let bases = i64::from(self.hits)
            + 2 * i64::from(self.doubles)
            + 3 * i64::from(self.triples)
            + 4 * i64::from(self.home_runs);
        ratio(bases, self.at_bats.into())
    }

    pub fn on_base_percentage(&self) -> f64 {
        round_to(self.on_base_raw(), 3)
    }

    /// Slugging formatted with exactly three decimals
    pub fn slugging(&self) -> String {
        format!("{:.3}", self.slugging_raw())
    }

    pub fn ops(&self) -> f64 {
        self.on_base_raw() + self.slugging_raw()
    }
}

/// How a trend metric's value is represented on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Summed counting stat (JSON integer)
    Count,
    /// Rate stat (JSON number)
    Rate,
    /// Rate stat pre-formatted as a decimal string
    Formatted,
}

/// A per-date, per-player trend series served under `/stats/all_players/<segment>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendMetric {
    BattingAverage,
    Slugging,
    OnBasePercentage,
    Ops,
    Runs,
    Rbis,
    StolenBases,
    Strikeouts,
    Walks,
    HitByPitch,
    SacrificeFlies,
}

impl TrendMetric {
    pub const ALL: [TrendMetric; 11] = [
        TrendMetric::BattingAverage,
        TrendMetric::Slugging,
        TrendMetric::OnBasePercentage,
        TrendMetric::Ops,
        TrendMetric::Runs,
        TrendMetric::Rbis,
        TrendMetric::StolenBases,
        TrendMetric::Strikeouts,
        TrendMetric::Walks,
        TrendMetric::HitByPitch,
        TrendMetric::SacrificeFlies,
    ];

    /// URL path segment after `/stats/all_players/`
    pub fn path_segment(self) -> &'static str {
        match self {
            TrendMetric::BattingAverage => "games",
            TrendMetric::Slugging => "slugging",
            TrendMetric::OnBasePercentage => "obp",
            TrendMetric::Ops => "ops",
            TrendMetric::Runs => "runs",
            TrendMetric::Rbis => "rbis",
            TrendMetric::StolenBases => "stolen_bases",
            TrendMetric::Strikeouts => "strikeouts",
            TrendMetric::Walks => "walks",
            TrendMetric::HitByPitch => "hbp",
            TrendMetric::SacrificeFlies => "sacrifice_flies",
        }
    }

    /// JSON key holding the metric value in each trend row
    pub fn column(self) -> &'static str {
        match self {
            TrendMetric::BattingAverage => "batting_average",
            TrendMetric::Slugging => "slugging_percentage",
            TrendMetric::OnBasePercentage => "on_base_percentage",
            TrendMetric::Ops => "ops",
            TrendMetric::Runs => "total_runs",
            TrendMetric::Rbis => "total_rbis",
            TrendMetric::StolenBases => "total_stolen_bases",
            TrendMetric::Strikeouts => "total_strikeouts",
            TrendMetric::Walks => "total_walks",
            TrendMetric::HitByPitch => "hit_by_pitch",
            TrendMetric::SacrificeFlies => "sacrifice_flies",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            TrendMetric::BattingAverage | TrendMetric::OnBasePercentage | TrendMetric::Ops => {
                ValueKind::Rate
            },
            TrendMetric::Slugging => ValueKind::Formatted,
            _ => ValueKind::Count,
        }
    }

    /// Human-readable label for chart titles and table headers
    pub fn label(self) -> &'static str {
        match self {
            TrendMetric::BattingAverage => "Batting Average",
            TrendMetric::Slugging => "Slugging Percentage",
            TrendMetric::OnBasePercentage => "On-Base Percentage",
            TrendMetric::Ops => "OPS",
            TrendMetric::Runs => "Runs",
            TrendMetric::Rbis => "RBIs",
            TrendMetric::StolenBases => "Stolen Bases",
            TrendMetric::Strikeouts => "Strikeouts",
            TrendMetric::Walks => "Walks",
            TrendMetric::HitByPitch => "Hit By Pitch",
            TrendMetric::SacrificeFlies => "Sacrifice Flies",
        }
    }
}

impl FromStr for TrendMetric {
    type Err = DugoutError;

    /// Accepts either the path segment (`obp`) or the column name (`on_base_percentage`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TrendMetric::ALL
            .into_iter()
            .find(|m| m.path_segment() == wanted || m.column() == wanted)
            .ok_or_else(|| DugoutError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
