pub mod roster;
pub mod stats;

pub use roster::{RosterSummary, UploadRosterCommand, UploadRosterError};
pub use stats::{StatsSummary, UploadStatsCommand, UploadStatsError};
