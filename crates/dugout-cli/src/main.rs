//! Dugout CLI - Main entry point

use clap::Parser;
use dugout_cli::{
    api::{ApiClient, StatFilters},
    commands,
    config::Config,
    Cli, Commands, ExportCommand, GamesCommand, PlayersCommand, StatsCommand,
};
use dugout_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // A local .env may carry DUGOUT_SERVER_URL / DUGOUT_ADMIN_TOKEN
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Verbose mode logs debug to the console; otherwise only warnings
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Stderr)
        .log_file_prefix("dugout-cli")
        .filter_directives(if cli.verbose { "dugout_cli=debug" } else { "dugout_cli=warn" })
        .build();

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env_with(log_config.clone()).unwrap_or(log_config);

    // The CLI works without logging
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> dugout_cli::Result<()> {
    let config = Config::new(cli.server_url, cli.token)?;
    let client = ApiClient::new(&config)?;

    match cli.command {
        Commands::Players { command } => match command {
            PlayersCommand::List => commands::players::list(&client).await,
            PlayersCommand::Show { id } => commands::players::show(&client, id).await,
            PlayersCommand::Add { name, position } => {
                commands::players::add(&client, name, position).await
            },
            PlayersCommand::Remove { id } => commands::players::remove(&client, id).await,
        },

        Commands::Games { command } => match command {
            GamesCommand::List => commands::games::list(&client).await,
            GamesCommand::Add {
                date,
                opponent,
                location,
                result,
            } => commands::games::add(&client, date, opponent, location, result).await,
            GamesCommand::Remove { id } => commands::games::remove(&client, id).await,
        },

        Commands::Stats { command } => match command {
            StatsCommand::List {
                filters,
                page,
                per_page,
                format,
            } => {
                let filters = StatFilters::from(filters);
                commands::stats::list(&client, &filters, page, per_page, format).await
            },
            StatsCommand::Record {
                player_id,
                game_id,
                line,
            } => commands::stats::record(&client, player_id, game_id, line.into()).await,
            StatsCommand::Remove { id } => commands::stats::remove(&client, id).await,
        },

        Commands::Leaderboard => commands::leaderboard::run(&client).await,

        Commands::Trend {
            metric,
            players,
            player_id,
            format,
        } => commands::trend::run(&client, metric, player_id, &players, format).await,

        Commands::Upload { kind, file } => {
            commands::upload::run(&client, kind.into(), &file).await
        },

        Commands::Export { command } => match command {
            ExportCommand::Stats { filters, output } => {
                commands::export::stats(&client, &StatFilters::from(filters), &output).await
            },
        },

        Commands::Health => commands::health::run(&client).await,
    }
}
