//! CSV bulk import of rosters and stat lines
//!
//! Each upload is parsed in full, then written inside a single transaction so
//! a failure leaves the tables untouched.

pub mod commands;
pub mod parse;
pub mod routes;

pub use commands::{
    RosterSummary, StatsSummary, UploadRosterCommand, UploadRosterError, UploadStatsCommand,
    UploadStatsError,
};
pub use parse::CsvError;
pub use routes::upload_routes;
