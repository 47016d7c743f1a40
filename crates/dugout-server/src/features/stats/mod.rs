//! Per-game stat lines
//!
//! Recording, editing and listing the counting stats a player put up in a
//! single game. Season aggregates built on these rows live in
//! [`crate::features::aggregates`].

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateStatCommand, CreateStatError, DeleteStatCommand, DeleteStatError, UpdateStatCommand,
    UpdateStatError,
};
pub use queries::{GetStatError, GetStatQuery, ListStatsError, ListStatsQuery, StatListItem};
pub use routes::stats_routes;
