//! Session configuration from TOML (`[session]` section)

use docqa_application::SessionParams;
use docqa_domain::{DEFAULT_CONTEXT_WINDOW, QueryMode};
use serde::{Deserialize, Serialize};

/// Raw session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Number of recent turns sent as context with chat questions
    pub context_window: usize,
    /// Mode the session starts in
    pub default_mode: QueryMode,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            default_mode: QueryMode::default(),
        }
    }
}

impl FileSessionConfig {
    pub fn to_session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_context_window(self.context_window)
            .with_initial_mode(self.default_mode)
    }
}
