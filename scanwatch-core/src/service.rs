//! Remote scan service seam
//!
//! The polling engine talks to the remote service only through this trait.
//! Transports (HTTP, in-memory fakes) implement it.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::scan::ScanId;
use crate::dto::scan::CancelScanResult;

/// Operations exposed by the remote scan service
#[async_trait]
pub trait ScanService: Send + Sync {
    /// Whether any scan is currently running on the service
    async fn is_any_scan_running(&self) -> Result<bool>;

    /// Starts a new scan
    ///
    /// # Returns
    /// The identifier of the started scan
    async fn start_scan(&self) -> Result<ScanId>;

    /// Queries the status of one scan
    ///
    /// # Returns
    /// `Some(true)` while running, `Some(false)` once finished, `None` when
    /// the service has no definitive answer
    async fn scan_status(&self, scan_id: &ScanId) -> Result<Option<bool>>;

    /// Cancels a scan
    async fn cancel_scan(&self, scan_id: &ScanId) -> Result<CancelScanResult>;
}
