//! orgmap Server - Main entry point

use anyhow::Result;
use orgmap_common::logging::{init_logging, LogConfig};
use tracing::info;

use orgmap_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_config = LogConfig::builder()
        .log_file_prefix("orgmap-server")
        .filter_directives("orgmap_server=debug,tower_http=debug,sqlx=warn")
        .build()
        // Environment variables take precedence
        .merge_lookup(|key| std::env::var(key).ok())?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting orgmap server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await?;

    info!("Server shut down gracefully");

    Ok(())
}
