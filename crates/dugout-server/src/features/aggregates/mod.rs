//! Read-only aggregates over the stat table
//!
//! Every derived number (batting average, OBP, slugging, OPS, totals) is
//! computed in SQL on each read; nothing here is stored or cached. Stat rows
//! detached from a deleted player or game are excluded by the joins.

pub mod queries;
pub mod routes;

pub use queries::{
    CareerError, CareerLine, CareerQuery, CompareError, CompareQuery, ComparisonLine,
    LeaderboardEntry, LeaderboardError, TrendError, TrendPoint, TrendQuery, TrendValue,
};
pub use routes::aggregate_routes;
