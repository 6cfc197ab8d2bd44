//! Backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_DOCUMENT_LIMIT: u32 = 100;

/// Raw backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Root URL of the question-answering service
    pub base_url: String,
    /// Per-request timeout; unset means no client-side timeout
    pub timeout_seconds: Option<u64>,
    /// Maximum number of documents fetched for the catalog
    pub document_limit: u32,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            document_limit: DEFAULT_DOCUMENT_LIMIT,
        }
    }
}

impl FileBackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
