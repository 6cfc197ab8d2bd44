//! Domain layer for docqa
//!
//! This crate contains the conversation session, query modes, and the shapes
//! of backend results. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Query modes
//!
//! - **Single**: ask about one document
//! - **KnowledgeBase**: ask across the whole corpus
//! - **Compare**: analyse two or more documents side by side
//! - **Arena**: several models answer the same question independently
//!
//! ## Conversation
//!
//! A [`ConversationSession`] holds the ordered turn log (seeded with a
//! greeting), the active mode with its document selections, and the latest
//! arena results. Only the last few turns ([`DEFAULT_CONTEXT_WINDOW`]) are
//! ever sent to the backend.

pub mod arena;
pub mod config;
pub mod core;
pub mod mode;
pub mod qa;
pub mod response;
pub mod session;

// Re-export commonly used types
pub use arena::result_set::ArenaResultSet;
pub use config::OutputFormat;
pub use crate::core::{
    document::{Document, DocumentId},
    error::ValidationError,
    question::{PREVIEW_CHARS, Question},
};
pub use mode::{
    controller::{ModeController, Selection, validate},
    query_mode::QueryMode,
};
pub use qa::value_objects::{
    ArenaAnswers, Comparison, ComparisonReport, DocumentRef, LengthComparison, QaAnswer,
};
pub use response::formatter::{ERROR_MARKER, ResponseFormatter};
pub use session::{
    conversation::ConversationSession,
    entities::{ContextMessage, ConversationTurn, Role},
    history::{ConversationHistory, DEFAULT_CONTEXT_WINDOW, GREETING},
};
