//! sortbatch-server: sort batches of integer arrays over HTTP.

use anyhow::Result;
use sortbatch_server::{app, config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse CLI args and run
    let config = config::ServerConfig::parse();
    app::run(&config).await
}
