//! CLI command implementations
//!
//! Each subcommand has its own module. Every command builds on one
//! [`ApiClient`](crate::api::ApiClient) and fails on its own with a plain message.

pub mod export;
pub mod games;
pub mod health;
pub mod leaderboard;
pub mod players;
pub mod stats;
pub mod trend;
pub mod upload;
