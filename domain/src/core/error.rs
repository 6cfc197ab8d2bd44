//! Domain error types

use thiserror::Error;

/// Precondition failures detected before a query is dispatched.
///
/// These are reported to the user as transient warnings. They never create a
/// conversation turn and never reach the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select a document before asking a question")]
    MissingDocument,

    #[error("Select at least two documents to compare ({selected} selected)")]
    InsufficientDocuments { selected: usize },

    #[error("Question cannot be empty")]
    EmptyQuestion,
}
