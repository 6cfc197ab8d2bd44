//! Query mode definitions.
//!
//! Defines [`QueryMode`], the single user-facing axis that decides which
//! backend operation a question is routed to:
//!
//! | mode | selection | result |
//! |---|---|---|
//! | Single | one document | answer appended to the chat |
//! | KnowledgeBase | none | answer appended to the chat |
//! | Compare | two or more documents | comparison summary appended to the chat |
//! | Arena | one document | per-model answers shown side by side |

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a question is posed to the backend. Exactly one is active per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryMode {
    /// Question about one selected document
    #[default]
    Single,
    /// Question across the whole corpus
    KnowledgeBase,
    /// Comparison of two or more selected documents
    Compare,
    /// Several models answer the same question about one document
    Arena,
}

impl QueryMode {
    pub const ALL: [QueryMode; 4] = [
        QueryMode::Single,
        QueryMode::KnowledgeBase,
        QueryMode::Compare,
        QueryMode::Arena,
    ];

    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            QueryMode::Single => "Single document: ask about one selected document",
            QueryMode::KnowledgeBase => "Knowledge base: ask across every document",
            QueryMode::Compare => "Compare: analyse two or more selected documents",
            QueryMode::Arena => "Arena: several models answer about one document",
        }
    }

    /// Whether results of this mode are recorded in the conversation
    pub fn is_chat_bearing(&self) -> bool {
        !matches!(self, QueryMode::Arena)
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Single => write!(f, "single"),
            QueryMode::KnowledgeBase => write!(f, "knowledge-base"),
            QueryMode::Compare => write!(f, "compare"),
            QueryMode::Arena => write!(f, "arena"),
        }
    }
}

impl std::str::FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "doc" | "s" => Ok(QueryMode::Single),
            "knowledge-base" | "knowledge_base" | "kb" => Ok(QueryMode::KnowledgeBase),
            "compare" | "cmp" | "c" => Ok(QueryMode::Compare),
            "arena" | "a" => Ok(QueryMode::Arena),
            _ => Err(format!("Invalid QueryMode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        for mode in QueryMode::ALL {
            let parsed: QueryMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("kb".parse::<QueryMode>().unwrap(), QueryMode::KnowledgeBase);
        assert_eq!("knowledge_base".parse::<QueryMode>().unwrap(), QueryMode::KnowledgeBase);
        assert_eq!("ARENA".parse::<QueryMode>().unwrap(), QueryMode::Arena);
        assert!("chat".parse::<QueryMode>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&QueryMode::KnowledgeBase).unwrap();
        assert_eq!(json, "\"knowledge-base\"");
        let mode: QueryMode = serde_json::from_str("\"compare\"").unwrap();
        assert_eq!(mode, QueryMode::Compare);
    }

    #[test]
    fn test_only_arena_is_not_chat_bearing() {
        assert!(QueryMode::Single.is_chat_bearing());
        assert!(QueryMode::KnowledgeBase.is_chat_bearing());
        assert!(QueryMode::Compare.is_chat_bearing());
        assert!(!QueryMode::Arena.is_chat_bearing());
    }
}
