//! Dugout CLI Library
//!
//! Command-line client for a Dugout server.
//!
//! # Overview
//!
//! - **Roster**: list, show, add and remove players (`dugout players`)
//! - **Schedule**: list, add and remove games (`dugout games`)
//! - **Stat lines**: filtered, paged listing plus record/remove (`dugout stats`)
//! - **Aggregates**: the leaderboard and per-date trend series pivoted into one
//!   column per player (`dugout leaderboard`, `dugout trend`)
//! - **Bulk data**: CSV import and CSV/JSON export (`dugout upload`, `dugout export`)
//! - **Connectivity**: server and database health (`dugout health`)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pivot;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dugout_common::stats::{StatLine, TrendMetric};
use std::path::PathBuf;

use crate::api::{StatFilters, UploadKind};
use crate::config::DEFAULT_SERVER_URL;
use crate::output::OutputFormat;

/// Dugout - baseball team stats from the terminal
#[derive(Parser, Debug)]
#[command(name = "dugout")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server URL
    #[arg(long, env = "DUGOUT_SERVER_URL", default_value = DEFAULT_SERVER_URL, global = true)]
    pub server_url: String,

    /// Admin bearer token, required for writes when the server enforces one
    #[arg(long, env = "DUGOUT_ADMIN_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the roster
    Players {
        #[command(subcommand)]
        command: PlayersCommand,
    },

    /// Manage the schedule
    Games {
        #[command(subcommand)]
        command: GamesCommand,
    },

    /// Per-game stat lines
    Stats {
        #[command(subcommand)]
        command: StatsCommand,
    },

    /// Career leaders ordered by on-base percentage
    Leaderboard,

    /// Per-date trend of one metric, one column per player
    Trend {
        /// games (batting average), slugging, obp, ops, runs, rbis, stolen_bases,
        /// strikeouts, walks, hbp or sacrifice_flies
        metric: TrendMetric,

        /// Only these players (comma separated names)
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,

        /// Batting average trend for a single player id
        #[arg(long)]
        player_id: Option<i32>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Import a CSV file
    Upload {
        #[arg(value_enum)]
        kind: UploadTarget,

        /// Path to the CSV file
        file: PathBuf,
    },

    /// Write data to a file
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },

    /// Check that the server is up and its database reachable
    Health,
}

#[derive(Subcommand, Debug)]
pub enum PlayersCommand {
    /// List every player
    List,

    /// Show one player with career totals
    Show { id: i32 },

    /// Add a player
    Add { name: String, position: String },

    /// Delete a player; their stat lines are kept but detached
    Remove { id: i32 },
}

#[derive(Subcommand, Debug)]
pub enum GamesCommand {
    /// List games, most recent first
    List,

    /// Add a game
    Add {
        /// Game date (YYYY-MM-DD)
        date: String,

        opponent: String,

        #[arg(long)]
        location: Option<String>,

        /// Final result, e.g. "W 5-3"
        #[arg(long)]
        result: Option<String>,
    },

    /// Delete a game; its stat lines are kept but detached
    Remove { id: i32 },
}

#[derive(Subcommand, Debug)]
pub enum StatsCommand {
    /// List stat lines with filters and client-side paging
    List {
        #[command(flatten)]
        filters: StatFilterArgs,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Lines per page (all lines when omitted)
        #[arg(long)]
        per_page: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Record one player's line for one game
    Record {
        #[arg(long)]
        player_id: i32,

        #[arg(long)]
        game_id: i32,

        #[command(flatten)]
        line: StatLineArgs,
    },

    /// Delete a stat line
    Remove { id: i32 },
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Export the stat listing
    Stats {
        #[command(flatten)]
        filters: StatFilterArgs,

        /// Destination; `.csv` or `.json`
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Upload endpoints as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UploadTarget {
    Roster,
    Stats,
}

impl From<UploadTarget> for UploadKind {
    fn from(target: UploadTarget) -> Self {
        match target {
            UploadTarget::Roster => UploadKind::Roster,
            UploadTarget::Stats => UploadKind::Stats,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct StatFilterArgs {
    #[arg(long)]
    pub player_id: Option<i32>,

    #[arg(long)]
    pub game_id: Option<i32>,

    /// Earliest game date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest game date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Order by hits or home_runs instead of most recent game
    #[arg(long, value_parser = ["hits", "home_runs"])]
    pub sort_by: Option<String>,
}

impl From<StatFilterArgs> for StatFilters {
    fn from(args: StatFilterArgs) -> Self {
        StatFilters {
            player_id: args.player_id,
            game_id: args.game_id,
            start_date: args.start_date,
            end_date: args.end_date,
            sort_by: args.sort_by,
        }
    }
}

/// Counting stats; anything omitted is 0
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct StatLineArgs {
    #[arg(long, default_value_t = 0)]
    pub at_bats: i32,
    #[arg(long, default_value_t = 0)]
    pub hits: i32,
    #[arg(long, default_value_t = 0)]
    pub runs: i32,
    #[arg(long, default_value_t = 0)]
    pub rbis: i32,
    #[arg(long, default_value_t = 0)]
    pub home_runs: i32,
    #[arg(long, default_value_t = 0)]
    pub walks: i32,
    #[arg(long, default_value_t = 0)]
    pub strikeouts: i32,
    #[arg(long, default_value_t = 0)]
    pub doubles: i32,
    #[arg(long, default_value_t = 0)]
    pub triples: i32,
    #[arg(long, default_value_t = 0)]
    pub hit_by_pitch: i32,
    #[arg(long, default_value_t = 0)]
    pub sacrifice_flies: i32,
    #[arg(long, default_value_t = 0)]
    pub stolen_bases: i32,
}

impl From<StatLineArgs> for StatLine {
    fn from(args: StatLineArgs) -> Self {
        StatLine {
            at_bats: args.at_bats,
            hits: args.hits,
            runs: args.runs,
            rbis: args.rbis,
            home_runs: args.home_runs,
            walks: args.walks,
            strikeouts: args.strikeouts,
            doubles: args.doubles,
            triples: args.triples,
            hit_by_pitch: args.hit_by_pitch,
            sacrifice_flies: args.sacrifice_flies,
            stolen_bases: args.stolen_bases,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_trend() {
        let cli = Cli::try_parse_from([
            "dugout", "trend", "obp", "--players", "Ann,Bo", "--format", "csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Trend {
                metric,
                players,
                format,
                player_id,
            } => {
                assert_eq!(metric, TrendMetric::OnBasePercentage);
                assert_eq!(players, vec!["Ann", "Bo"]);
                assert_eq!(format, OutputFormat::Csv);
                assert_eq!(player_id, None);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_metric_rejected() {
        assert!(Cli::try_parse_from(["dugout", "trend", "war"]).is_err());
    }

    #[test]
    fn test_parse_stats_record_defaults_to_zero() {
        let cli = Cli::try_parse_from([
            "dugout", "stats", "record", "--player-id", "1", "--game-id", "2", "--at-bats", "4",
            "--hits", "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Stats {
                command:
                    StatsCommand::Record {
                        player_id,
                        game_id,
                        line,
                    },
            } => {
                assert_eq!((player_id, game_id), (1, 2));
                let line = StatLine::from(line);
                assert_eq!(line.at_bats, 4);
                assert_eq!(line.hits, 2);
                assert_eq!(line.walks, 0);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_sort_by_limited() {
        assert!(Cli::try_parse_from(["dugout", "stats", "list", "--sort-by", "hits"]).is_ok());
        assert!(Cli::try_parse_from(["dugout", "stats", "list", "--sort-by", "runs"]).is_err());
    }
}
