//! Arena result set.

use crate::qa::value_objects::ArenaAnswers;
use std::collections::BTreeMap;

/// Per-model answers from the most recent arena query.
///
/// Independent of the conversation history. Each new result replaces the
/// previous mapping wholesale; entries are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaResultSet {
    answers: BTreeMap<String, String>,
}

impl ArenaResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new mapping, discarding whatever was there
    pub fn replace(&mut self, answers: ArenaAnswers) {
        self.answers = answers.answers;
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn get(&self, model: &str) -> Option<&str> {
        self.answers.get(model).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate `(model, answer)` pairs ordered by model name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(m, a)| (m.as_str(), a.as_str()))
    }
}
