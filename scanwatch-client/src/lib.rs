//! Scanwatch HTTP Client
//!
//! A simple, type-safe client for the remote scan service's GraphQL API.
//!
//! The client implements [`scanwatch_core::ScanService`], so the polling
//! engine can drive it without knowing about HTTP.
//!
//! # Example
//!
//! ```no_run
//! use scanwatch_client::ScanClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ScanClient::new("https://scanner.example.com").with_token("secret");
//!
//!     let scan_id = client.start_scan().await?;
//!     println!("Started scan: {}", scan_id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graphql;
mod scans;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::graphql::{GraphQlRequest, GraphQlResponse};

/// HTTP client for the scan service API
#[derive(Debug, Clone)]
pub struct ScanClient {
    /// Base URL of the service (e.g., "http://localhost:8080")
    base_url: String,
    /// Bearer token sent with every request
    api_token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl ScanClient {
    /// Create a new scan client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the scan service (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use scanwatch_client::ScanClient;
    ///
    /// let client = ScanClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new scan client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use scanwatch_client::ScanClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ScanClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: None,
            client,
        }
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the GraphQL endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    // =============================================================================
    // Request Execution
    // =============================================================================

    /// Execute one GraphQL operation and decode its `data`
    async fn execute<V, T>(&self, operation_name: &str, query: &str, variables: Option<V>) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!("GraphQL {} -> {}", operation_name, self.endpoint());

        let mut request = self.client.post(self.endpoint()).json(&GraphQlRequest {
            query,
            operation_name,
            variables,
        });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let envelope: GraphQlResponse<T> = self.handle_response(response).await?;
        envelope.into_data()
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
