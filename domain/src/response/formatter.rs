//! Response formatting.
//!
//! Converts each backend result shape into the plain text stored as an
//! assistant turn. Output is never markup; rendering is left to the view.

use crate::qa::value_objects::{ComparisonReport, QaAnswer};

/// Prefix of the assistant turn recorded when a chat-bearing dispatch fails.
pub const ERROR_MARKER: &str = "Request failed: ";

/// Builds displayable turn content from backend results.
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Single-document and knowledge-base answers are used verbatim
    pub fn answer(result: &QaAnswer) -> String {
        result.answer.clone()
    }

    /// Fixed-template summary of a comparison.
    ///
    /// Only the total length is reported; per-document lengths stay out of
    /// the chat summary.
    pub fn comparison(report: &ComparisonReport) -> String {
        format!(
            "Comparison analysis:\n\n{}\n\n* document count: {}\n* total length: {}",
            report.ai_analysis,
            report.document_count(),
            report.total_length()
        )
    }

    /// Content of the turn recorded for a failed dispatch
    pub fn failure(message: &str) -> String {
        format!("{}{}", ERROR_MARKER, message)
    }
}
