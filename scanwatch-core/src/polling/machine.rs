//! Polling state machine
//!
//! Drives the status probe at a fixed interval until the accumulated
//! evidence yields an outcome. The loop is strictly sequential: one probe at
//! a time, then one `sleep` before the next. It reads no cancellation signal
//! of its own; dropping the future returned by [`PollingStateMachine::run`]
//! (for example under `tokio::time::timeout` or `tokio::select!`) stops it at
//! the next suspension point.

use chrono::Utc;
use tokio::time;
use tracing::{debug, info, warn};

use crate::domain::outcome::{Outcome, PollingReport};
use crate::domain::scan::ScanId;
use crate::probe::StatusProbe;

use super::config::PollingConfig;
use super::state::{PollingState, Transition};

/// One polling session against one scan
pub struct PollingStateMachine<'a> {
    config: &'a PollingConfig,
    probe: &'a StatusProbe,
    state: PollingState,
}

impl<'a> PollingStateMachine<'a> {
    /// Creates a fresh session
    pub fn new(config: &'a PollingConfig, probe: &'a StatusProbe) -> Self {
        Self {
            config,
            probe,
            state: PollingState::new(),
        }
    }

    /// Polls the scan until an outcome is reached
    ///
    /// Consumes the session: the state machine cannot be probed again once
    /// it has produced an outcome.
    pub async fn run(mut self, scan_id: &ScanId) -> PollingReport {
        let started_at = Utc::now();

        info!(
            "Watching scan {} (max attempts: {}, interval: {:?}, initialization timeout: {:?})",
            scan_id,
            self.config.max_attempts(),
            self.config.poll_interval(),
            self.config.initialization_timeout()
        );

        if self.config.is_initialization_strict() {
            warn!(
                "Poll interval {:?} exceeds initialization timeout {:?}; the first indeterminate status will end the session",
                self.config.poll_interval(),
                self.config.initialization_timeout()
            );
        }

        let outcome = self.poll(scan_id).await;

        info!(
            "Scan {} finished polling: {} after {} attempt(s)",
            scan_id,
            outcome,
            self.state.attempts()
        );

        PollingReport {
            scan_id: scan_id.clone(),
            outcome,
            attempts: self.state.attempts(),
            started_at,
            finished_at: Utc::now(),
        }
    }

    async fn poll(&mut self, scan_id: &ScanId) -> Outcome {
        loop {
            if !self.state.has_budget(self.config) {
                return Outcome::MaxAttemptsReached;
            }

            if self.state.attempts() > 0 {
                time::sleep(self.config.poll_interval()).await;
            }

            let observation = self.probe.probe(scan_id).await;
            let transition = self.state.observe(observation, self.config);

            debug!(
                "Scan {} attempt {}/{}: {} (phase: {:?}, consecutive indeterminate: {}/{})",
                scan_id,
                self.state.attempts(),
                self.config.max_attempts(),
                observation,
                self.state.phase(),
                self.state.consecutive_indeterminate(),
                self.config.max_consecutive_indeterminate()
            );

            if let Transition::Terminal(outcome) = transition {
                return outcome;
            }
        }
    }
}
