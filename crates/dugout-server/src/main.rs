//! Dugout Server - Main entry point

use anyhow::Result;
use dugout_common::logging::{init_logging, LogConfig};
use tracing::info;

use dugout_server::{api, config::Config, db};

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("dugout-server")
        .filter_directives("dugout_server=debug,tower_http=debug,sqlx=warn")
        .build();

    // Environment variables take precedence
    let log_config = LogConfig::from_env_with(log_config.clone()).unwrap_or(log_config);

    init_logging(&log_config)?;

    info!("Starting Dugout Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database).await?;
    info!("Database connection pool established");

    db::run_migrations(&pool).await?;

    api::serve(config, pool).await
}
