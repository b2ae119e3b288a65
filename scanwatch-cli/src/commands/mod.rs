//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod scan;

use anyhow::{Context, Result};
use clap::Subcommand;
use scanwatch_client::ScanClient;
use scanwatch_core::ScanSession;
use std::sync::Arc;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start a new scan and watch it until it ends
    Start {
        /// Return right after the scan is started
        #[arg(long)]
        no_wait: bool,
    },
    /// Watch an existing scan until it ends
    Watch {
        /// Scan ID
        scan_id: String,
    },
    /// Check the status of a scan once
    Status {
        /// Scan ID
        scan_id: String,
    },
    /// Check whether any scan is running
    Active,
    /// Cancel a scan
    Cancel {
        /// Scan ID (prompted for when omitted)
        scan_id: Option<String>,
    },
}

/// Handle a CLI command
///
/// Builds the client and session from the configuration, then routes the
/// command to its handler.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let session = build_session(config)?;

    match command {
        Commands::Start { no_wait } => scan::start(&session, no_wait).await,
        Commands::Watch { scan_id } => scan::watch(&session, scan_id.into()).await,
        Commands::Status { scan_id } => scan::status(&session, scan_id.into()).await,
        Commands::Active => scan::active(&session).await,
        Commands::Cancel { scan_id } => scan::cancel(&session, scan_id.map(Into::into)).await,
    }
}

fn build_session(config: &Config) -> Result<ScanSession> {
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let mut client = ScanClient::with_client(config.api_url.clone(), http_client);
    if let Some(token) = &config.api_token {
        client = client.with_token(token.clone());
    }

    Ok(ScanSession::new(Arc::new(client), config.polling.clone()))
}
