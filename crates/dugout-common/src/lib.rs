//! Dugout Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the Dugout workspace.
//!
//! # Overview
//!
//! This crate provides functionality used by both the server and the CLI:
//!
//! - **Error Handling**: [`DugoutError`] and the [`Result`] alias
//! - **Logging**: tracing subscriber setup driven by [`logging::LogConfig`]
//! - **Stats**: the counting-stat line, the rate-stat formulas and the set of
//!   trend metrics exposed under `/stats/all_players/*`
//!
//! # Example
//!
//! ```no_run
//! use dugout_common::stats::{batting_average, TrendMetric};
//!
//! let metric: TrendMetric = "obp".parse().unwrap();
//! assert_eq!(metric.column(), "on_base_percentage");
//! assert_eq!(batting_average(2, 4), 0.5);
//! ```

pub mod error;
pub mod logging;
pub mod stats;

// Re-export commonly used types
pub use error::{DugoutError, Result};
