//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod output;
mod repl;
mod session;

pub use backend::{DEFAULT_BASE_URL, DEFAULT_DOCUMENT_LIMIT, FileBackendConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("session.context_window cannot be 0")]
    InvalidContextWindow,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub backend: FileBackendConfig,
    /// Conversation settings
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Reject values the application cannot start with
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.backend.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.session.context_window == 0 {
            return Err(ConfigValidationError::InvalidContextWindow);
        }
        Ok(())
    }
}
