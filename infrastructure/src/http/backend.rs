//! reqwest implementation of [`QaBackend`]

use super::response::{ArenaPayload, decode, transport_error};
use crate::config::FileBackendConfig;
use async_trait::async_trait;
use docqa_application::{BackendError, QaBackend};
use docqa_domain::{
    ArenaAnswers, ComparisonReport, ContextMessage, Document, DocumentId, PREVIEW_CHARS, QaAnswer,
    Question,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Request body for the chat-bearing endpoints
#[derive(Serialize)]
struct HistoryBody<'a> {
    history: &'a [ContextMessage],
}

/// HTTP client for the document question-answering service
#[derive(Clone)]
pub struct HttpQaBackend {
    client: reqwest::Client,
    base_url: String,
    document_limit: u32,
}

impl HttpQaBackend {
    pub fn new(config: &FileBackendConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "docqa/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            document_limit: config.document_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!("Backend responded {} ({} bytes)", status, body.len());
        decode(status, &body)
    }
}

#[async_trait]
impl QaBackend for HttpQaBackend {
    async fn list_documents(&self) -> Result<Vec<Document>, BackendError> {
        debug!("GET /documents/ (limit {})", self.document_limit);
        let request = self
            .client
            .get(self.url("/documents/"))
            .query(&[("skip", 0), ("limit", self.document_limit)]);
        self.send(request).await
    }

    async fn single_document_qa(
        &self,
        document: DocumentId,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<QaAnswer, BackendError> {
        debug!(
            "POST /qa/single-document (document {}, {} history turns): {}",
            document,
            history.len(),
            question.preview(PREVIEW_CHARS)
        );
        let request = self
            .client
            .post(self.url("/qa/single-document"))
            .query(&[
                ("document_id", document.to_string()),
                ("question", question.content().to_string()),
            ])
            .json(&HistoryBody { history });
        self.send(request).await
    }

    async fn knowledge_base_qa(
        &self,
        question: &Question,
        history: &[ContextMessage],
    ) -> Result<QaAnswer, BackendError> {
        debug!(
            "POST /qa/knowledge-base ({} history turns): {}",
            history.len(),
            question.preview(PREVIEW_CHARS)
        );
        let request = self
            .client
            .post(self.url("/qa/knowledge-base"))
            .query(&[("question", question.content())])
            .json(&HistoryBody { history });
        self.send(request).await
    }

    async fn multi_document_comparison(
        &self,
        documents: &[DocumentId],
        question: &Question,
    ) -> Result<ComparisonReport, BackendError> {
        debug!(
            "POST /qa/multi-document-comparison ({} documents): {}",
            documents.len(),
            question.preview(PREVIEW_CHARS)
        );
        let mut params: Vec<(&str, String)> = documents
            .iter()
            .map(|id| ("document_ids", id.to_string()))
            .collect();
        params.push(("question", question.content().to_string()));

        let request = self
            .client
            .post(self.url("/qa/multi-document-comparison"))
            .query(&params);
        self.send(request).await
    }

    async fn multi_model_qa(
        &self,
        document: DocumentId,
        question: &Question,
    ) -> Result<ArenaAnswers, BackendError> {
        debug!(
            "POST /qa/multi-model (document {}): {}",
            document,
            question.preview(PREVIEW_CHARS)
        );
        let request = self
            .client
            .post(self.url("/qa/multi-model"))
            .query(&[
                ("document_id", document.to_string()),
                ("question", question.content().to_string()),
            ]);
        let payload: ArenaPayload = self.send(request).await?;
        Ok(payload.into())
    }
}
