//! Terminal outcome of a polling session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::scan::ScanId;

/// How a polling session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The scan reported completion
    Completed,
    /// The scan was seen running and then stopped reporting
    Cancelled,
    /// The scan never confirmed it was running within the initialization window
    InitializationTimeout,
    /// The attempt budget ran out without a definitive answer
    MaxAttemptsReached,
}

impl Outcome {
    /// Whether the scan is known to have run to completion
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// Operator guidance for outcomes that need follow-up
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Outcome::Completed => None,
            Outcome::Cancelled => {
                Some("The scan stopped reporting after it was running; it was likely cancelled or deleted.")
            }
            Outcome::InitializationTimeout => Some(
                "The scan never reported that it started. Check whether it was cancelled before initialization finished.",
            ),
            Outcome::MaxAttemptsReached => Some(
                "No definitive status within the attempt budget. Increase --max-attempts or the poll interval.",
            ),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Completed => "completed",
            Outcome::Cancelled => "cancelled",
            Outcome::InitializationTimeout => "initialization timeout",
            Outcome::MaxAttemptsReached => "max attempts reached",
        };
        f.write_str(label)
    }
}

/// Result of one polling session, handed back to the caller for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingReport {
    pub scan_id: ScanId,
    pub outcome: Outcome,
    /// Number of observations taken, including the one that ended the session
    pub attempts: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl PollingReport {
    /// Wall-clock time the session spent polling
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at.signed_duration_since(self.started_at)
    }
}
