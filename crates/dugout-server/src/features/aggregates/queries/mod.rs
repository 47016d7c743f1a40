pub mod career;
pub mod compare;
pub mod leaderboard;
pub mod trends;

pub use career::{CareerError, CareerLine, CareerQuery};
pub use compare::{CompareError, CompareQuery, ComparisonLine};
pub use leaderboard::{LeaderboardEntry, LeaderboardError};
pub use trends::{TrendError, TrendPoint, TrendQuery, TrendValue};
