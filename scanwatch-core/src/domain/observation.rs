//! Observation of a scan's status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified result of one status probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Observation {
    /// The service affirmatively reports the scan is executing
    Running,
    /// The service affirmatively reports the scan has completed
    Finished,
    /// No definitive answer: absent record, null status, or a failed query
    Indeterminate,
}

impl Observation {
    /// Classify the raw nullable status reported by the service
    ///
    /// `Some(true)` means the scan is still running, `Some(false)` that it
    /// finished, `None` that the service had nothing to say.
    pub fn from_status(status: Option<bool>) -> Self {
        match status {
            Some(true) => Observation::Running,
            Some(false) => Observation::Finished,
            None => Observation::Indeterminate,
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Observation::Running => "running",
            Observation::Finished => "finished",
            Observation::Indeterminate => "indeterminate",
        };
        f.write_str(label)
    }
}
