//! Value objects returned by the question-answering backend.
//!
//! Field names follow the backend's JSON so these types deserialize directly
//! from response bodies. Optional fields the backend may or may not send are
//! `#[serde(default)]`.

use crate::core::document::DocumentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer to a single-document or knowledge-base question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaAnswer {
    /// The question as the backend understood it
    pub question: String,
    /// The answer text
    pub answer: String,
    /// Document the answer was drawn from (single-document mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    /// Filename of that document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    /// Number of documents consulted (knowledge-base mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_count: Option<usize>,
}

impl QaAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            document_id: None,
            document_title: None,
            document_count: None,
        }
    }
}

/// Reference to a compared document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: DocumentId,
    pub title: String,
}

/// Character lengths of the compared documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthComparison {
    #[serde(default)]
    pub document_lengths: Vec<u64>,
    pub total_length: u64,
}

/// Structural comparison computed by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub length_comparison: LengthComparison,
    /// Most frequent words per document, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_keywords: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similarities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub differences: Vec<String>,
}

/// Result of a multi-document comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub documents: Vec<DocumentRef>,
    pub comparison: Comparison,
    /// Free-text analysis written by the model
    #[serde(default)]
    pub ai_analysis: String,
}

impl ComparisonReport {
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn total_length(&self) -> u64 {
        self.comparison.length_comparison.total_length
    }

    pub fn document_lengths(&self) -> &[u64] {
        &self.comparison.length_comparison.document_lengths
    }
}

/// Answers from every arena model, keyed by model name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaAnswers {
    pub answers: BTreeMap<String, String>,
}

impl ArenaAnswers {
    pub fn new(answers: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_document_answer_from_backend_json() {
        let json = r#"{
            "document_id": 2,
            "document_title": "handbook.docx",
            "question": "Who approves leave?",
            "answer": "Your line manager."
        }"#;
        let answer: QaAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.answer, "Your line manager.");
        assert_eq!(answer.document_id, Some(DocumentId::new(2)));
        assert_eq!(answer.document_count, None);
    }

    #[test]
    fn comparison_report_from_backend_json() {
        let json = r#"{
            "documents": [{"id": 1, "title": "a.txt"}, {"id": 2, "title": "b.txt"}],
            "comparison": {
                "similarities": [],
                "differences": [],
                "length_comparison": {"document_lengths": [200, 300], "total_length": 500},
                "top_keywords": [["alpha", "beta"], ["gamma"]]
            },
            "ai_analysis": "Both cover onboarding."
        }"#;
        let report: ComparisonReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.document_count(), 2);
        assert_eq!(report.total_length(), 500);
        assert_eq!(report.document_lengths(), &[200, 300]);
        assert_eq!(report.comparison.top_keywords[1], vec!["gamma".to_string()]);
    }

    #[test]
    fn comparison_report_without_analysis_defaults_to_empty() {
        let json = r#"{
            "documents": [],
            "comparison": {"length_comparison": {"total_length": 0}}
        }"#;
        let report: ComparisonReport = serde_json::from_str(json).unwrap();
        assert!(report.ai_analysis.is_empty());
        assert!(report.document_lengths().is_empty());
    }

    #[test]
    fn arena_answers_from_backend_json() {
        let json = r#"{"answers": {"model-a": "foo", "model-b": "bar"}}"#;
        let arena: ArenaAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(arena.answers.len(), 2);
        assert_eq!(arena.answers["model-b"], "bar");
    }
}
