//! Scripted backend double shared by use case tests.

use crate::ports::qa_backend::{BackendError, QaBackend};
use async_trait::async_trait;
use docqa_domain::{
    ArenaAnswers, ComparisonReport, ContextMessage, Document, DocumentId, QaAnswer, Question,
};
use std::sync::Mutex;

/// A backend call as observed by [`ScriptedBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendCall {
    ListDocuments,
    Single {
        document: DocumentId,
        question: String,
        history: Vec<ContextMessage>,
    },
    KnowledgeBase {
        question: String,
        history: Vec<ContextMessage>,
    },
    Compare {
        documents: Vec<DocumentId>,
        question: String,
    },
    Arena {
        document: DocumentId,
        question: String,
    },
}

/// Returns the scripted result for each operation and records every call.
///
/// Operations without a scripted result fail with [`BackendError::Other`].
#[derive(Default)]
pub(crate) struct ScriptedBackend {
    documents: Vec<Document>,
    answer: Option<Result<QaAnswer, BackendError>>,
    comparison: Option<Result<ComparisonReport, BackendError>>,
    arena: Option<Result<ArenaAnswers, BackendError>>,
    calls: Mutex<Vec<BackendCall>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_answer(mut self, result: Result<QaAnswer, BackendError>) -> Self {
        self.answer = Some(result);
        self
    }

    pub fn with_comparison(mut self, result: Result<ComparisonReport, BackendError>) -> Self {
        self.comparison = Some(result);
        self
    }

    pub fn with_arena(mut self, result: Result<ArenaAnswers, BackendError>) -> Self {
        self.arena = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn scripted<T: Clone>(slot: &Option<Result<T, BackendError>>) -> Result<T, BackendError> {
        slot.clone()
            .unwrap_or_else(|| Err(BackendError::Other("not scripted".to_string())))
    }
}

#[async_trait]
impl QaBackend for ScriptedBackend {
    async fn list_documents(&self) -> Result<Vec<Document>, BackendError> {
        self.record(BackendCall::ListDocuments);
        Ok(self.documents.clone())
    }

    async fn single_document_qa(
        &self,
        document: DocumentId,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<QaAnswer, BackendError> {
        self.record(BackendCall::Single {
            document,
            question: question.content().to_string(),
            history: history.to_vec(),
        });
        Self::scripted(&self.answer)
    }

    async fn knowledge_base_qa(
        &self,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<QaAnswer, BackendError> {
        self.record(BackendCall::KnowledgeBase {
            question: question.content().to_string(),
            history: history.to_vec(),
        });
        Self::scripted(&self.answer)
    }

    async fn multi_document_comparison(
        &self,
        documents: &[DocumentId],
        question: &Question,
    ) -> Result<ComparisonReport, BackendError> {
        self.record(BackendCall::Compare {
            documents: documents.to_vec(),
            question: question.content().to_string(),
        });
        Self::scripted(&self.comparison)
    }

    async fn multi_model_qa(
        &self,
        document: DocumentId,
        question: &Question,
    ) -> Result<ArenaAnswers, BackendError> {
        self.record(BackendCall::Arena {
            document,
            question: question.content().to_string(),
        });
        Self::scripted(&self.arena)
    }
}
