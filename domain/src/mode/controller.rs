//! Active mode and document selection.

use super::query_mode::QueryMode;
use crate::core::document::DocumentId;
use crate::core::error::ValidationError;
use std::collections::BTreeSet;

/// Documents the user has picked for the current and other modes.
///
/// Both selections are kept across mode switches so that flipping between
/// modes does not lose the user's picks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Document for Single and Arena modes
    pub document: Option<DocumentId>,
    /// Documents for Compare mode
    pub compare: BTreeSet<DocumentId>,
}

impl Selection {
    pub fn with_document(mut self, id: impl Into<DocumentId>) -> Self {
        self.document = Some(id.into());
        self
    }

    pub fn with_compare<I, D>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DocumentId>,
    {
        self.compare = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Check the selection a mode needs before anything is dispatched.
///
/// - Single / Arena: a document must be selected
/// - Compare: at least two documents must be selected
/// - KnowledgeBase: always valid
pub fn validate(mode: QueryMode, selection: &Selection) -> Result<(), ValidationError> {
    match mode {
        QueryMode::Single | QueryMode::Arena => selection
            .document
            .map(|_| ())
            .ok_or(ValidationError::MissingDocument),
        QueryMode::Compare => {
            let selected = selection.compare.len();
            if selected >= 2 {
                Ok(())
            } else {
                Err(ValidationError::InsufficientDocuments { selected })
            }
        }
        QueryMode::KnowledgeBase => Ok(()),
    }
}

/// Owns the active [`QueryMode`] and the [`Selection`] it validates against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeController {
    mode: QueryMode,
    selection: Selection,
}

impl ModeController {
    pub fn new(mode: QueryMode) -> Self {
        Self {
            mode,
            selection: Selection::default(),
        }
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Switch the active mode, returning the previous one
    pub fn set_mode(&mut self, mode: QueryMode) -> QueryMode {
        std::mem::replace(&mut self.mode, mode)
    }

    pub fn select_document(&mut self, id: Option<DocumentId>) {
        self.selection.document = id;
    }

    pub fn set_compare_documents(&mut self, ids: impl IntoIterator<Item = DocumentId>) {
        self.selection.compare = ids.into_iter().collect();
    }

    /// Add the document to the compare set, or remove it if already present.
    ///
    /// Returns `true` if the document is selected afterwards.
    pub fn toggle_compare_document(&mut self, id: DocumentId) -> bool {
        if self.selection.compare.remove(&id) {
            false
        } else {
            self.selection.compare.insert(id);
            true
        }
    }

    /// Validate the active mode against the current selection
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.mode, &self.selection)
    }
}
