//! Service entry point: config parsing, logging setup, server startup.

use clap::Parser;
use echoip::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "echoip=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    // Bind failure is fatal: log it and exit non-zero.
    if let Err(error) = echoip::serve(&config).await {
        tracing::error!(%error, "server failed");
        std::process::exit(1);
    }
}
