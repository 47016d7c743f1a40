//! Shared validation utilities
//!
//! The API validates presence and counting-stat sanity only. Everything else
//! (name uniqueness, referenced ids) is left to the schema.
//!
//! # Examples
//!
//! ```rust,ignore
//! use dugout_server::features::shared::validation::{non_empty, check_non_negative};
//!
//! let name = non_empty(command.name.as_deref()).ok_or(CreatePlayerError::MissingFields)?;
//! check_non_negative(&command.line)?;
//! ```

use chrono::NaiveDate;
use dugout_common::stats::StatLine;
use thiserror::Error;

/// A counting field holds a negative value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field} cannot be negative.")]
pub struct NegativeStatError {
    pub field: &'static str,
}

/// More hits than at-bats
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Hits cannot be greater than at-bats.")]
pub struct HitsExceedAtBatsError;

/// A game date that is not `YYYY-MM-DD`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid date '{value}'. Expected YYYY-MM-DD.")]
pub struct DateValidationError {
    pub value: String,
}

/// Trimmed value, or `None` when absent or blank
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a calendar date in ISO form
///
/// A trailing time component (`2024-04-01T00:00:00.000Z`, as produced by
/// browser date pickers) is ignored.
pub fn parse_game_date(raw: &str) -> Result<NaiveDate, DateValidationError> {
    let trimmed = raw.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| DateValidationError {
        value: raw.to_string(),
    })
}

/// Every counting field must be zero or more
pub fn check_non_negative(line: &StatLine) -> Result<(), NegativeStatError> {
    match line.first_negative() {
        Some(field) => Err(NegativeStatError { field }),
        None => Ok(()),
    }
}

/// Hits may equal at-bats but not exceed them
pub fn check_hits_within_at_bats(line: &StatLine) -> Result<(), HitsExceedAtBatsError> {
    if line.hits > line.at_bats {
        Err(HitsExceedAtBatsError)
    } else {
        Ok(())
    }
}
