//! Query dispatch use case
//!
//! Maps a mode-specific [`QueryRequest`] to exactly one backend operation.

use crate::ports::qa_backend::{BackendError, QaBackend};
use docqa_domain::{
    ArenaAnswers, ComparisonReport, ContextMessage, Document, DocumentId, QaAnswer, QueryMode,
    PREVIEW_CHARS, Question, Selection, ValidationError, validate,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A question together with exactly the inputs its mode needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    Single {
        document: DocumentId,
        question: Question,
        history: Vec<ContextMessage>,
    },
    KnowledgeBase {
        question: Question,
        history: Vec<ContextMessage>,
    },
    Compare {
        documents: Vec<DocumentId>,
        question: Question,
    },
    Arena {
        document: DocumentId,
        question: Question,
    },
}

impl QueryRequest {
    /// Build the request for `mode` from the current selection.
    ///
    /// Fails with the same errors as [`validate`]. History starts empty; see
    /// [`attach_history`](Self::attach_history).
    pub fn for_mode(
        mode: QueryMode,
        selection: &Selection,
        question: Question,
    ) -> Result<Self, ValidationError> {
        validate(mode, selection)?;
        let request = match mode {
            QueryMode::Single => QueryRequest::Single {
                document: selection.document.ok_or(ValidationError::MissingDocument)?,
                question,
                history: Vec::new(),
            },
            QueryMode::KnowledgeBase => QueryRequest::KnowledgeBase {
                question,
                history: Vec::new(),
            },
            QueryMode::Compare => QueryRequest::Compare {
                documents: selection.compare.iter().copied().collect(),
                question,
            },
            QueryMode::Arena => QueryRequest::Arena {
                document: selection.document.ok_or(ValidationError::MissingDocument)?,
                question,
            },
        };
        Ok(request)
    }

    /// Set the prior-turn context. Modes that take no history ignore it.
    pub fn attach_history(&mut self, context: Vec<ContextMessage>) {
        match self {
            QueryRequest::Single { history, .. } | QueryRequest::KnowledgeBase { history, .. } => {
                *history = context;
            }
            QueryRequest::Compare { .. } | QueryRequest::Arena { .. } => {}
        }
    }

    pub fn mode(&self) -> QueryMode {
        match self {
            QueryRequest::Single { .. } => QueryMode::Single,
            QueryRequest::KnowledgeBase { .. } => QueryMode::KnowledgeBase,
            QueryRequest::Compare { .. } => QueryMode::Compare,
            QueryRequest::Arena { .. } => QueryMode::Arena,
        }
    }

    pub fn question(&self) -> &Question {
        match self {
            QueryRequest::Single { question, .. }
            | QueryRequest::KnowledgeBase { question, .. }
            | QueryRequest::Compare { question, .. }
            | QueryRequest::Arena { question, .. } => question,
        }
    }
}

/// Successful backend result, one variant per response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Answer(QaAnswer),
    Comparison(ComparisonReport),
    Arena(ArenaAnswers),
}

/// Routes each request variant to its backend operation
#[derive(Clone)]
pub struct QueryDispatcher {
    backend: Arc<dyn QaBackend>,
}

impl QueryDispatcher {
    pub fn new(backend: Arc<dyn QaBackend>) -> Self {
        Self { backend }
    }

    /// Catalog listing, passed straight through
    pub async fn list_documents(&self) -> Result<Vec<Document>, BackendError> {
        self.backend.list_documents().await
    }

    pub async fn dispatch(&self, request: &QueryRequest) -> Result<DispatchOutcome, BackendError> {
        info!(
            "Dispatching {} query: {}",
            request.mode(),
            request.question().preview(PREVIEW_CHARS)
        );

        let result = match request {
            QueryRequest::Single {
                document,
                question,
                history,
            } => self.single(*document, question, history).await,
            QueryRequest::KnowledgeBase { question, history } => {
                self.knowledge_base(question, history).await
            }
            QueryRequest::Compare {
                documents,
                question,
            } => self.compare(documents, question).await,
            QueryRequest::Arena { document, question } => self.arena(*document, question).await,
        };

        if let Err(e) = &result {
            warn!("{} query failed: {}", request.mode(), e);
        }
        result
    }

    async fn single(
        &self,
        document: DocumentId,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<DispatchOutcome, BackendError> {
        debug!("Single-document QA on {} with {} context turns", document, history.len());
        self.backend
            .single_document_qa(document, question, history)
            .await
            .map(DispatchOutcome::Answer)
    }

    async fn knowledge_base(
        &self,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<DispatchOutcome, BackendError> {
        debug!("Knowledge-base QA with {} context turns", history.len());
        self.backend
            .knowledge_base_qa(question, history)
            .await
            .map(DispatchOutcome::Answer)
    }

    async fn compare(
        &self,
        documents: &[DocumentId],
        question: &Question,
    ) -> Result<DispatchOutcome, BackendError> {
        debug!("Comparing {} documents", documents.len());
        self.backend
            .multi_document_comparison(documents, question)
            .await
            .map(DispatchOutcome::Comparison)
    }

    async fn arena(
        &self,
        document: DocumentId,
        question: &Question,
    ) -> Result<DispatchOutcome, BackendError> {
        let answers = self.backend.multi_model_qa(document, question).await?;
        debug!("Arena returned {} model answers", answers.answers.len());
        Ok(DispatchOutcome::Arena(answers))
    }
}
