//! Session orchestration
//!
//! Composes the activity gate, the start mutation and the polling state
//! machine into the flow a caller runs for one scan:
//! gate -> start -> watch -> report.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::outcome::PollingReport;
use crate::domain::scan::ScanId;
use crate::dto::scan::CancelScanResult;
use crate::error::SessionError;
use crate::polling::{PollingConfig, PollingStateMachine};
use crate::probe::StatusProbe;
use crate::service::ScanService;

/// Entry point for launching, watching and cancelling scans
pub struct ScanSession {
    service: Arc<dyn ScanService>,
    probe: StatusProbe,
    config: PollingConfig,
}

impl ScanSession {
    /// Creates a session runner over the given service
    pub fn new(service: Arc<dyn ScanService>, config: PollingConfig) -> Self {
        let probe = StatusProbe::new(Arc::clone(&service));
        Self {
            service,
            probe,
            config,
        }
    }

    pub fn config(&self) -> &PollingConfig {
        &self.config
    }

    pub fn probe(&self) -> &StatusProbe {
        &self.probe
    }

    /// Starts a new scan if none is active
    ///
    /// # Errors
    /// Returns an error if the gate reports an active scan (or cannot tell),
    /// or if the start mutation fails. No polling happens in either case.
    pub async fn start(&self) -> Result<ScanId, SessionError> {
        if self.probe.is_any_scan_active().await {
            info!("A scan is already running, not starting another");
            return Err(SessionError::ScanAlreadyActive);
        }

        let scan_id = self.service.start_scan().await.map_err(|e| {
            error!("Failed to start scan: {:#}", e);
            SessionError::StartFailed(e)
        })?;

        info!("Started scan {}", scan_id);
        Ok(scan_id)
    }

    /// Starts a new scan and watches it to an outcome
    pub async fn launch(&self) -> Result<PollingReport, SessionError> {
        let scan_id = self.start().await?;
        Ok(self.watch(&scan_id).await)
    }

    /// Watches an already started scan to an outcome
    pub async fn watch(&self, scan_id: &ScanId) -> PollingReport {
        PollingStateMachine::new(&self.config, &self.probe)
            .run(scan_id)
            .await
    }

    /// Requests cancellation of a scan
    ///
    /// Runs outside any polling loop. A session watching the same scan
    /// observes the effect as a `Cancelled` outcome.
    pub async fn cancel(&self, scan_id: &ScanId) -> Result<CancelScanResult, SessionError> {
        let result = self
            .service
            .cancel_scan(scan_id)
            .await
            .map_err(|source| SessionError::CancelFailed {
                scan_id: scan_id.to_string(),
                source,
            })?;

        if result.canceled {
            info!("Cancelled scan {}", result.scan_id);
        } else {
            info!(
                "Scan {} was not cancelled: {}",
                result.scan_id,
                result.error.as_deref().unwrap_or("no reason given")
            );
        }

        Ok(result)
    }
}
