//! Session parameters.
//!
//! [`SessionParams`] groups the static parameters the
//! [`SessionController`](crate::use_cases::session_controller::SessionController)
//! uses when building backend requests. These are application-layer concerns,
//! not domain policy.

use docqa_domain::{DEFAULT_CONTEXT_WINDOW, QueryMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Number of recent turns sent as context with chat questions.
    pub context_window: usize,
    /// Mode the session starts in.
    pub initial_mode: QueryMode,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            initial_mode: QueryMode::default(),
        }
    }
}

impl SessionParams {
    pub fn with_context_window(mut self, turns: usize) -> Self {
        self.context_window = turns;
        self
    }

    pub fn with_initial_mode(mut self, mode: QueryMode) -> Self {
        self.initial_mode = mode;
        self
    }
}
