pub mod get;
pub mod list;

pub use get::{GetStatError, GetStatQuery};
pub use list::{ListStatsError, ListStatsQuery, StatListItem};
