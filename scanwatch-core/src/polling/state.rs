//! Evidence accumulated across observations of one scan
//!
//! A null status means three different things on the service side: the scan
//! has not started yet, its record was purged, or it was cancelled while
//! running. The sticky `ever_observed_running` flag plus two separate
//! windows tell them apart:
//! - before the scan is seen running, indeterminate readings are tolerated
//!   for `max_consecutive_indeterminate` observations in a row;
//! - once it has been seen running, a single indeterminate reading ends the
//!   session as cancelled.

use crate::domain::observation::Observation;
use crate::domain::outcome::Outcome;

use super::config::PollingConfig;

/// Where a session stands before it terminates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing observed yet
    AwaitingFirstSignal,
    /// Only indeterminate readings so far
    Initializing,
    /// The scan has been seen running at least once
    Active,
}

/// Result of folding one observation into the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep polling
    Continue,
    /// The session is over
    Terminal(Outcome),
}

/// Mutable evidence owned by exactly one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollingState {
    attempts: u32,
    consecutive_indeterminate: u32,
    ever_observed_running: bool,
}

impl PollingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observations processed so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Length of the current run of indeterminate observations
    pub fn consecutive_indeterminate(&self) -> u32 {
        self.consecutive_indeterminate
    }

    pub fn ever_observed_running(&self) -> bool {
        self.ever_observed_running
    }

    pub fn phase(&self) -> Phase {
        if self.ever_observed_running {
            Phase::Active
        } else if self.attempts == 0 {
            Phase::AwaitingFirstSignal
        } else {
            Phase::Initializing
        }
    }

    /// Whether another observation is allowed under the attempt budget
    pub fn has_budget(&self, config: &PollingConfig) -> bool {
        self.attempts < config.max_attempts()
    }

    /// Folds one observation into the state and decides whether to stop
    ///
    /// The attempt that exhausts the budget terminates with
    /// `MaxAttemptsReached` unless the observation itself was terminal.
    pub fn observe(&mut self, observation: Observation, config: &PollingConfig) -> Transition {
        self.attempts += 1;

        let transition = match observation {
            Observation::Indeterminate => {
                self.consecutive_indeterminate += 1;

                if self.ever_observed_running {
                    Transition::Terminal(Outcome::Cancelled)
                } else if self.consecutive_indeterminate >= config.max_consecutive_indeterminate()
                {
                    Transition::Terminal(Outcome::InitializationTimeout)
                } else {
                    Transition::Continue
                }
            }
            Observation::Finished => {
                self.consecutive_indeterminate = 0;
                Transition::Terminal(Outcome::Completed)
            }
            Observation::Running => {
                self.ever_observed_running = true;
                self.consecutive_indeterminate = 0;
                Transition::Continue
            }
        };

        match transition {
            Transition::Continue if !self.has_budget(config) => {
                Transition::Terminal(Outcome::MaxAttemptsReached)
            }
            other => other,
        }
    }
}
