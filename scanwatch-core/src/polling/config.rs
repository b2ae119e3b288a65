//! Polling configuration
//!
//! Built once at the boundary (CLI flags, environment) and passed by
//! reference into every session.

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of observations before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Default pause between two observations
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Default time a scan may stay unconfirmed before it is presumed never started
pub const DEFAULT_INITIALIZATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Immutable polling parameters for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollingConfig {
    max_attempts: u32,
    poll_interval: Duration,
    initialization_timeout: Duration,
}

impl PollingConfig {
    /// Creates a validated configuration
    ///
    /// # Errors
    /// Returns an error if any value is zero.
    pub fn new(
        max_attempts: u32,
        poll_interval: Duration,
        initialization_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        if poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        if initialization_timeout.is_zero() {
            return Err(ConfigError::ZeroInitializationTimeout);
        }

        Ok(Self {
            max_attempts,
            poll_interval,
            initialization_timeout,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn initialization_timeout(&self) -> Duration {
        self.initialization_timeout
    }

    /// Consecutive indeterminate observations tolerated before a scan that
    /// never reported running is presumed never started
    ///
    /// Ceiling of `initialization_timeout / poll_interval`, so a fractional
    /// interval never shortens the configured timeout.
    pub fn max_consecutive_indeterminate(&self) -> u32 {
        let timeout = self.initialization_timeout.as_nanos();
        let interval = self.poll_interval.as_nanos();
        let windows = timeout.div_ceil(interval).max(1);
        u32::try_from(windows).unwrap_or(u32::MAX)
    }

    /// Whether the initialization window collapses to a single observation
    ///
    /// True when the poll interval exceeds the initialization timeout: the
    /// first indeterminate observation then ends the session.
    pub fn is_initialization_strict(&self) -> bool {
        self.poll_interval > self.initialization_timeout
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            initialization_timeout: DEFAULT_INITIALIZATION_TIMEOUT,
        }
    }
}
