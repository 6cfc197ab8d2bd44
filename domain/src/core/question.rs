//! Question value object

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Length of [`Question::preview`] used in log lines
pub const PREVIEW_CHARS: usize = 80;

/// A question to be answered by the backend (Value Object)
///
/// Surrounding whitespace is trimmed; the remaining text must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Parse user input into a question
    pub fn parse(content: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_new(content).ok_or(ValidationError::EmptyQuestion)
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The first `max_chars` characters, with an ellipsis when cut.
    /// Line breaks are folded to spaces so the preview stays on one line.
    pub fn preview(&self, max_chars: usize) -> Cow<'_, str> {
        let cut = self.content.char_indices().nth(max_chars).map(|(i, _)| i);
        let head = match cut {
            Some(end) => &self.content[..end],
            None => self.content.as_str(),
        };

        if cut.is_none() && !head.contains('\n') {
            return Cow::Borrowed(head);
        }

        let mut preview = head.replace('\n', " ");
        if cut.is_some() {
            preview.push('…');
        }
        Cow::Owned(preview)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::parse(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}
