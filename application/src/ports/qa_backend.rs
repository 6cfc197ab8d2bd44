//! QA backend port
//!
//! Defines the interface for the remote question-answering service.

use async_trait::async_trait;
use docqa_domain::{
    ArenaAnswers, ComparisonReport, ContextMessage, Document, DocumentId, QaAnswer, Question,
};
use thiserror::Error;

/// Errors that can occur during backend operations.
///
/// The `Display` output is the human-readable message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the question-answering backend
///
/// Every operation is an opaque remote call that either resolves with the
/// documented shape or fails with a message. Transport, retry, and timeout
/// handling belong to the implementation.
#[async_trait]
pub trait QaBackend: Send + Sync {
    /// List the documents available for selection
    async fn list_documents(&self) -> Result<Vec<Document>, BackendError>;

    /// Ask a question about one document
    async fn single_document_qa(
        &self,
        document: DocumentId,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<QaAnswer, BackendError>;

    /// Ask a question across the whole corpus
    async fn knowledge_base_qa(
        &self,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<QaAnswer, BackendError>;

    /// Compare two or more documents
    async fn multi_document_comparison(
        &self,
        documents: &[DocumentId],
        question: &Question,
    ) -> Result<ComparisonReport, BackendError>;

    /// Ask several models the same question about one document
    async fn multi_model_qa(
        &self,
        document: DocumentId,
        question: &Question,
    ) -> Result<ArenaAnswers, BackendError>;
}
