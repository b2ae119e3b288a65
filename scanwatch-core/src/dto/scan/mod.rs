//! Scan DTOs

use serde::{Deserialize, Serialize};

use crate::domain::scan::ScanId;

/// Payload of the start-scan mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartScanPayload {
    pub scan_id: ScanId,
}

/// Payload of the cancel-scan mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelScanResult {
    pub canceled: bool,
    pub error: Option<String>,
    /// Identifier the service echoes back for the cancelled scan
    pub scan_id: String,
    pub previous_scan_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_result_from_camel_case() {
        let json = r#"{"canceled":true,"error":null,"scanId":"s-2","previousScanId":"s-1"}"#;
        let result: CancelScanResult = serde_json::from_str(json).unwrap();

        assert!(result.canceled);
        assert!(result.error.is_none());
        assert_eq!(result.scan_id, "s-2");
        assert_eq!(result.previous_scan_id.as_deref(), Some("s-1"));
    }

    #[test]
    fn test_cancel_result_missing_optionals() {
        let json = r#"{"canceled":false,"error":"not running","scanId":"s-3"}"#;
        let result: CancelScanResult = serde_json::from_str(json).unwrap();

        assert!(!result.canceled);
        assert_eq!(result.error.as_deref(), Some("not running"));
        assert!(result.previous_scan_id.is_none());
    }
}
