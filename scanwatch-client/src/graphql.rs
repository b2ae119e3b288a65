//! GraphQL request and response envelopes

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Body of a GraphQL POST
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub operation_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// One entry of the `errors` array
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Standard GraphQL response envelope
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T: DeserializeOwned> GraphQlResponse<T> {
    /// Extract `data`, turning reported errors into a `ClientError`
    ///
    /// Errors win over partial data: an operation that reports any error is
    /// treated as failed.
    pub fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(ClientError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        self.data
            .ok_or_else(|| ClientError::ParseError("GraphQL response has no data".to_string()))
    }
}
