//! Conversation session domain.
//!
//! - [`entities::ConversationTurn`]: a single message authored by the user or the assistant
//! - [`history::ConversationHistory`]: the ordered turn log and its bounded context window
//! - [`conversation::ConversationSession`]: turns, mode selection and arena results as one value

pub mod conversation;
pub mod entities;
pub mod history;
