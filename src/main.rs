//! Order service binary
//!
//! Reads configuration from the environment (see [`orders::config`]), opens
//! the configured store and serves the REST API until SIGTERM or Ctrl+C.

use anyhow::Result;
use orders::config::ServiceConfig;
use orders::server::ServerBuilder;
use orders::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    telemetry::init(&config.log_level);

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_store_from_config(&config.storage)
        .await?
        .serve(&config.bind_addr())
        .await
}
