//! Scanwatch CLI
//!
//! Command-line interface for starting, watching and cancelling remote scans.

mod commands;
mod config;
mod prompt;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scanwatch")]
#[command(about = "Start and watch remote scans", long_about = None)]
struct Cli {
    /// Scan service URL
    #[arg(long, env = "SCANWATCH_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Bearer token for the scan service
    #[arg(long, env = "SCANWATCH_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "SCANWATCH_REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout: u64,

    /// Maximum number of status checks per watch
    #[arg(long, env = "SCANWATCH_MAX_ATTEMPTS", default_value_t = 100)]
    max_attempts: u32,

    /// Seconds between status checks
    #[arg(long, env = "SCANWATCH_POLL_INTERVAL", default_value_t = 30)]
    poll_interval: u64,

    /// Seconds a scan may stay unconfirmed before it is presumed never started
    #[arg(long, env = "SCANWATCH_INIT_TIMEOUT", default_value_t = 300)]
    init_timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "scanwatch=debug,scanwatch_core=debug,scanwatch_client=debug"
    } else {
        "scanwatch=info,scanwatch_core=info,scanwatch_client=info"
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::new(
        cli.api_url,
        cli.api_token,
        cli.request_timeout,
        cli.max_attempts,
        cli.poll_interval,
        cli.init_timeout,
    )?;

    handle_command(cli.command, &config).await
}
