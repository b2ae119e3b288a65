//! Scripted in-memory scan service for tests

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::scan::ScanId;
use crate::dto::scan::CancelScanResult;
use crate::service::ScanService;

/// A call received by the fake service
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    IsAnyRunning,
    Start,
    Status(String),
    Cancel(String),
}

/// Replays scripted answers and records every call
///
/// Status queries beyond the script fail. Tests assert on the recorded calls
/// to catch a probe that should never have happened.
pub(crate) struct ScriptedScanService {
    active: Mutex<Option<Result<bool>>>,
    start: Mutex<Option<Result<ScanId>>>,
    statuses: Mutex<VecDeque<Result<Option<bool>>>>,
    cancel: Mutex<Option<Result<CancelScanResult>>>,
    calls: Mutex<Vec<Call>>,
}

impl Default for ScriptedScanService {
    fn default() -> Self {
        Self {
            active: Mutex::new(Some(Ok(false))),
            start: Mutex::new(Some(Ok(ScanId::new("scan-1")))),
            statuses: Mutex::new(VecDeque::new()),
            cancel: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedScanService {
    pub(crate) fn with_statuses(statuses: Vec<Result<Option<bool>>>) -> Self {
        let service = Self::default();
        *service.statuses.lock().unwrap() = statuses.into();
        service
    }

    pub(crate) fn active(self, answer: Result<bool>) -> Self {
        *self.active.lock().unwrap() = Some(answer);
        self
    }

    pub(crate) fn start(self, answer: Result<ScanId>) -> Self {
        *self.start.lock().unwrap() = Some(answer);
        self
    }

    pub(crate) fn cancel(self, answer: Result<CancelScanResult>) -> Self {
        *self.cancel.lock().unwrap() = Some(answer);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::Status(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ScanService for ScriptedScanService {
    async fn is_any_scan_running(&self) -> Result<bool> {
        self.record(Call::IsAnyRunning);
        self.active
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(anyhow!("no scripted activity answer")))
    }

    async fn start_scan(&self) -> Result<ScanId> {
        self.record(Call::Start);
        self.start
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(anyhow!("no scripted start answer")))
    }

    async fn scan_status(&self, scan_id: &ScanId) -> Result<Option<bool>> {
        self.record(Call::Status(scan_id.to_string()));
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("status script exhausted")))
    }

    async fn cancel_scan(&self, scan_id: &ScanId) -> Result<CancelScanResult> {
        self.record(Call::Cancel(scan_id.to_string()));
        self.cancel.lock().unwrap().take().unwrap_or_else(|| {
            Ok(CancelScanResult {
                canceled: true,
                error: None,
                scan_id: scan_id.to_string(),
                previous_scan_id: None,
            })
        })
    }
}
