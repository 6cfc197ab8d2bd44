//! Session observer port
//!
//! The view layer subscribes to session state changes through
//! [`SessionObserver`] instead of polling the session.

use docqa_domain::{ConversationTurn, QueryMode, Selection};
use tokio::sync::mpsc;

/// State changes emitted by the session controller
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Active mode switched (arena results were discarded)
    ModeChanged { from: QueryMode, to: QueryMode },
    /// Document selection changed
    SelectionChanged(Selection),
    /// A turn was appended to the conversation
    TurnAppended(ConversationTurn),
    /// Arena results were replaced; carries the number of models that answered
    ArenaUpdated { models: usize },
    /// Arena results were discarded
    ArenaCleared,
    /// Conversation reset to the greeting
    HistoryCleared,
    /// A backend call is outstanding
    DispatchStarted { mode: QueryMode },
    /// The outstanding backend call resolved
    DispatchFinished { mode: QueryMode, success: bool },
    /// Submission blocked before dispatch (not recorded in the conversation)
    Warning { message: String },
    /// Transient failure notice (not recorded in the conversation)
    Notification { message: String },
    /// A completion arrived for a request that is no longer current
    StaleCompletionDiscarded { mode: QueryMode },
}

/// Receives session events as they happen
pub trait SessionObserver: Send + Sync {
    fn on_event(&self, event: &SessionEvent);
}

/// No-op observer for tests and headless use
pub struct NoSessionObserver;

impl SessionObserver for NoSessionObserver {
    fn on_event(&self, _event: &SessionEvent) {}
}

/// Forward events to a channel; a closed receiver is ignored.
impl SessionObserver for mpsc::UnboundedSender<SessionEvent> {
    fn on_event(&self, event: &SessionEvent) {
        let _ = self.send(event.clone());
    }
}
