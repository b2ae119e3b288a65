//! Status probe
//!
//! Wraps the scan service's status queries and folds every failure into a
//! value the polling engine can reason about. Nothing here returns an error:
//! a failed status query is an indeterminate observation, and a failed
//! activity check is treated as "something is running".

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::observation::Observation;
use crate::domain::scan::ScanId;
use crate::service::ScanService;

/// Issues single status queries against a scan service
#[derive(Clone)]
pub struct StatusProbe {
    service: Arc<dyn ScanService>,
}

impl StatusProbe {
    /// Creates a new probe over the given service
    pub fn new(service: Arc<dyn ScanService>) -> Self {
        Self { service }
    }

    /// Queries the status of one scan, exactly once
    ///
    /// Transport and parse failures become `Observation::Indeterminate`.
    pub async fn probe(&self, scan_id: &ScanId) -> Observation {
        match self.service.scan_status(scan_id).await {
            Ok(status) => {
                let observation = Observation::from_status(status);
                debug!("Scan {} status {:?} -> {}", scan_id, status, observation);
                observation
            }
            Err(e) => {
                warn!("Status query for scan {} failed: {:#}", scan_id, e);
                Observation::Indeterminate
            }
        }
    }

    /// Checks whether any scan is active on the service
    ///
    /// Returns `true` when the check itself fails, so a caller never starts a
    /// duplicate scan on an unknown answer.
    pub async fn is_any_scan_active(&self) -> bool {
        match self.service.is_any_scan_running().await {
            Ok(active) => active,
            Err(e) => {
                warn!(
                    "Could not determine whether a scan is running, assuming one is: {:#}",
                    e
                );
                true
            }
        }
    }
}
