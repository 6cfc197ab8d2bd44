//! Conversation history and context window.

use super::entities::{ContextMessage, ConversationTurn};

/// Greeting the assistant opens every session with.
pub const GREETING: &str = "Hello! I can answer questions about your documents. Pick a mode, select documents, and ask away.";

/// Number of recent turns sent to the backend as context.
pub const DEFAULT_CONTEXT_WINDOW: usize = 6;

/// Ordered log of conversation turns.
///
/// Stored history is unbounded; only the window handed to the backend is capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    /// Create a history seeded with the greeting turn
    pub fn new() -> Self {
        Self {
            turns: vec![ConversationTurn::assistant(GREETING)],
        }
    }

    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The last `k` user/assistant turns, oldest first.
    ///
    /// System turns are skipped before the window is taken, so they never
    /// occupy a slot.
    pub fn context_window(&self, k: usize) -> Vec<ContextMessage> {
        let mut window: Vec<ContextMessage> = self
            .turns
            .iter()
            .rev()
            .filter(|turn| turn.role().is_conversational())
            .take(k)
            .map(ConversationTurn::to_context)
            .collect();
        window.reverse();
        window
    }

    /// Reset to the single seeded greeting turn
    pub fn clear(&mut self) {
        self.turns.clear();
        self.turns.push(ConversationTurn::assistant(GREETING));
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}
