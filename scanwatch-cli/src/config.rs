//! Configuration module
//!
//! Handles CLI configuration including the service URL, credentials and
//! polling parameters. Defaults are applied here, at the boundary; the
//! polling engine only ever sees a validated `PollingConfig`.

use anyhow::{Context, Result};
use scanwatch_core::PollingConfig;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scan service
    pub api_url: String,

    /// Bearer token for the scan service
    pub api_token: Option<String>,

    /// Timeout applied to every HTTP request, including status probes
    pub request_timeout: Duration,

    /// Polling parameters for watch sessions
    pub polling: PollingConfig,
}

impl Config {
    /// Builds and validates the configuration from raw values
    ///
    /// Durations are given in seconds.
    pub fn new(
        api_url: String,
        api_token: Option<String>,
        request_timeout_secs: u64,
        max_attempts: u32,
        poll_interval_secs: u64,
        init_timeout_secs: u64,
    ) -> Result<Self> {
        let polling = PollingConfig::new(
            max_attempts,
            Duration::from_secs(poll_interval_secs),
            Duration::from_secs(init_timeout_secs),
        )
        .context("Invalid polling configuration")?;

        let config = Self {
            api_url,
            api_token: api_token.filter(|t| !t.trim().is_empty()),
            request_timeout: Duration::from_secs(request_timeout_secs),
            polling,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}
