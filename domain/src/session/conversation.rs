//! Conversation session aggregate.

use super::entities::ConversationTurn;
use super::history::ConversationHistory;
use crate::arena::result_set::ArenaResultSet;
use crate::core::document::DocumentId;
use crate::core::error::ValidationError;
use crate::mode::controller::{ModeController, Selection};
use crate::mode::query_mode::QueryMode;
use crate::qa::value_objects::ArenaAnswers;

/// Everything the view renders: the turn log, the active mode with its
/// selections, and the latest arena results.
///
/// Mutated only through the methods below so the mode/arena coupling holds:
/// every mode switch and every clear empties the arena results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationSession {
    history: ConversationHistory,
    modes: ModeController,
    arena: ArenaResultSet,
}

impl ConversationSession {
    pub fn new(mode: QueryMode) -> Self {
        Self {
            history: ConversationHistory::new(),
            modes: ModeController::new(mode),
            arena: ArenaResultSet::new(),
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        self.history.turns()
    }

    pub fn mode(&self) -> QueryMode {
        self.modes.mode()
    }

    pub fn selection(&self) -> &Selection {
        self.modes.selection()
    }

    pub fn arena(&self) -> &ArenaResultSet {
        &self.arena
    }

    /// Switch mode. Arena results are always discarded, whichever modes are
    /// involved; the turn log is kept.
    pub fn set_mode(&mut self, mode: QueryMode) -> QueryMode {
        self.arena.clear();
        self.modes.set_mode(mode)
    }

    pub fn select_document(&mut self, id: Option<DocumentId>) {
        self.modes.select_document(id);
    }

    pub fn set_compare_documents(&mut self, ids: impl IntoIterator<Item = DocumentId>) {
        self.modes.set_compare_documents(ids);
    }

    pub fn toggle_compare_document(&mut self, id: DocumentId) -> bool {
        self.modes.toggle_compare_document(id)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.modes.validate()
    }

    pub fn append(&mut self, turn: ConversationTurn) {
        self.history.append(turn);
    }

    pub fn replace_arena(&mut self, answers: ArenaAnswers) {
        self.arena.replace(answers);
    }

    /// Reset the turn log to the greeting and discard arena results.
    ///
    /// Mode and selections are left as they are.
    pub fn clear(&mut self) {
        self.history.clear();
        self.arena.clear();
    }
}
