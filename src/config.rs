//! Runtime configuration.

use clap::Parser;

/// Immutable runtime configuration, constructed once at process start and
/// passed by reference into the server.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "echoip",
    version,
    about = "Answers every request with the caller's IP address"
)]
pub struct Config {
    /// Port to listen on.
    #[arg(short, long, env = "WHOAMI_PORT_NUMBER", default_value_t = 80)]
    pub port: u16,

    /// Emit one structured log record per handled request.
    #[arg(short, long)]
    pub verbose: bool,
}
