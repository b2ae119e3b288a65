//! Scan-related API operations

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use scanwatch_core::ScanService;
use scanwatch_core::domain::scan::ScanId;
use scanwatch_core::dto::scan::{CancelScanResult, StartScanPayload};

use crate::ScanClient;
use crate::error::Result;

const IS_SCAN_RUNNING: &str = "query IsScanRunning { isScanRunning }";

const START_SCAN: &str = "mutation StartScan { startScan { scanId } }";

const SCAN_STATUS: &str = "query ScanStatus($scanId: ID!) { scanStatus(scanId: $scanId) }";

const CANCEL_SCAN: &str = "mutation CancelScan($scanId: ID!) { \
    cancelScan(scanId: $scanId) { canceled error scanId previousScanId } }";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanIdVariables<'a> {
    scan_id: &'a ScanId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IsScanRunningData {
    is_scan_running: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartScanData {
    start_scan: StartScanPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanStatusData {
    scan_status: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelScanData {
    cancel_scan: CancelScanResult,
}

impl ScanClient {
    // =============================================================================
    // Scan Queries
    // =============================================================================

    /// Check whether any scan is currently running
    pub async fn is_scan_running(&self) -> Result<bool> {
        let data: IsScanRunningData = self
            .execute::<(), _>("IsScanRunning", IS_SCAN_RUNNING, None)
            .await?;

        Ok(data.is_scan_running)
    }

    /// Get the raw status of a scan
    ///
    /// # Arguments
    /// * `scan_id` - The scan identifier
    ///
    /// # Returns
    /// `Some(true)` while running, `Some(false)` once finished, `None` when
    /// the service reports nothing
    pub async fn scan_status(&self, scan_id: &ScanId) -> Result<Option<bool>> {
        let data: ScanStatusData = self
            .execute("ScanStatus", SCAN_STATUS, Some(ScanIdVariables { scan_id }))
            .await?;

        Ok(data.scan_status)
    }

    // =============================================================================
    // Scan Lifecycle
    // =============================================================================

    /// Start a new scan
    ///
    /// # Returns
    /// The identifier of the started scan
    pub async fn start_scan(&self) -> Result<ScanId> {
        let data: StartScanData = self
            .execute::<(), _>("StartScan", START_SCAN, None)
            .await?;

        Ok(data.start_scan.scan_id)
    }

    /// Cancel a scan
    ///
    /// # Arguments
    /// * `scan_id` - The scan to cancel
    pub async fn cancel_scan(&self, scan_id: &ScanId) -> Result<CancelScanResult> {
        let data: CancelScanData = self
            .execute("CancelScan", CANCEL_SCAN, Some(ScanIdVariables { scan_id }))
            .await?;

        Ok(data.cancel_scan)
    }
}

#[async_trait]
impl ScanService for ScanClient {
    async fn is_any_scan_running(&self) -> anyhow::Result<bool> {
        Ok(self.is_scan_running().await?)
    }

    async fn start_scan(&self) -> anyhow::Result<ScanId> {
        Ok(ScanClient::start_scan(self).await?)
    }

    async fn scan_status(&self, scan_id: &ScanId) -> anyhow::Result<Option<bool>> {
        Ok(ScanClient::scan_status(self, scan_id).await?)
    }

    async fn cancel_scan(&self, scan_id: &ScanId) -> anyhow::Result<CancelScanResult> {
        Ok(ScanClient::cancel_scan(self, scan_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP response and returns the raw request it received
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];

            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn test_scan_status_sends_variables_and_token() {
        let (url, server) = serve_once("200 OK", r#"{"data":{"scanStatus":true}}"#).await;
        let client = ScanClient::new(url).with_token("secret");

        let status = client.scan_status(&ScanId::new("scan-5")).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(status, Some(true));
        assert!(request.starts_with("POST /graphql "));
        assert!(request.to_lowercase().contains("authorization: bearer secret"));
        assert!(request.contains(r#""scanId":"scan-5""#));
        assert!(request.contains(r#""operationName":"ScanStatus""#));
    }

    #[tokio::test]
    async fn test_null_status_is_none() {
        let (url, server) = serve_once("200 OK", r#"{"data":{"scanStatus":null}}"#).await;
        let client = ScanClient::new(url);

        let status = client.scan_status(&ScanId::new("gone")).await.unwrap();
        server.await.unwrap();

        assert_eq!(status, None);
    }

    #[tokio::test]
    async fn test_start_scan_returns_id() {
        let (url, server) =
            serve_once("200 OK", r#"{"data":{"startScan":{"scanId":"scan-77"}}}"#).await;
        let client = ScanClient::new(url);

        let scan_id = client.start_scan().await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(scan_id, ScanId::new("scan-77"));
        assert!(!request.contains("variables"));
        assert!(!request.to_lowercase().contains("authorization"));
    }

    #[tokio::test]
    async fn test_is_scan_running() {
        let (url, server) = serve_once("200 OK", r#"{"data":{"isScanRunning":false}}"#).await;
        let client = ScanClient::new(url);

        assert!(!client.is_scan_running().await.unwrap());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_scan_decodes_payload() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"data":{"cancelScan":{"canceled":true,"error":null,"scanId":"scan-2","previousScanId":"scan-1"}}}"#,
        )
        .await;
        let client = ScanClient::new(url);

        let result = client.cancel_scan(&ScanId::new("scan-2")).await.unwrap();
        server.await.unwrap();

        assert!(result.canceled);
        assert_eq!(result.scan_id, "scan-2");
        assert_eq!(result.previous_scan_id.as_deref(), Some("scan-1"));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let (url, server) = serve_once("401 Unauthorized", r#"{"error":"bad token"}"#).await;
        let client = ScanClient::new(url);

        let err = client.start_scan().await.unwrap_err();
        server.await.unwrap();

        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("bad token"));
    }

    #[tokio::test]
    async fn test_graphql_errors_surface() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"data":null,"errors":[{"message":"scan limit reached"}]}"#,
        )
        .await;
        let client = ScanClient::new(url);

        let err = client.start_scan().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ClientError::GraphQl(_)));
    }

    #[tokio::test]
    async fn test_service_trait_converts_errors() {
        let (url, server) = serve_once("500 Internal Server Error", "boom").await;
        let service: &dyn ScanService = &ScanClient::new(url);

        let err = service.scan_status(&ScanId::new("s")).await.unwrap_err();
        server.await.unwrap();

        let client_err = err.downcast_ref::<ClientError>().unwrap();
        assert!(client_err.is_server_error());
    }
}
