//! Scan domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one scan instance
///
/// Issued by the remote service when a scan starts. Never parsed or
/// interpreted locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanId(String);

impl ScanId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ScanId {
    fn from(s: String) -> Self {
        ScanId(s)
    }
}

impl From<&str> for ScanId {
    fn from(s: &str) -> Self {
        ScanId(s.to_string())
    }
}
