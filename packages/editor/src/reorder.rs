//! # Drag Reordering
//!
//! Adapters between the drag surfaces and the session.
//!
//! A form card drag has already moved the card on screen by the time it
//! ends, so the form list is settled in place rather than rebuilt, and only
//! the preview follows. Sidebar drags rearrange whole preview sections and
//! never touch the document.

use crate::{EditSession, EditorError};
use resume_model::{Change, CollectionKind, Mutation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// End of a card drag within one form list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub collection: CollectionKind,
    pub old_index: usize,
    pub new_index: usize,
}

impl DragEvent {
    pub fn new(collection: CollectionKind, old_index: usize, new_index: usize) -> Self {
        Self {
            collection,
            old_index,
            new_index,
        }
    }

    pub fn to_mutation(&self) -> Mutation {
        Mutation::ReorderEntry {
            collection: self.collection,
            old_index: self.old_index,
            new_index: self.new_index,
        }
    }
}

impl From<DragEvent> for Mutation {
    fn from(event: DragEvent) -> Self {
        event.to_mutation()
    }
}

impl EditSession {
    /// A form card was dropped; indices are positions before the move
    pub fn on_drag_end(&mut self, event: DragEvent) -> Result<Change, EditorError> {
        debug!(?event, "Card drag ended");
        self.apply(event.to_mutation())
    }

    /// The sidebar was rearranged. Unknown ids are skipped and returned.
    pub fn on_sections_arranged<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Vec<String> {
        let skipped = self.preview.arrange(ids);
        if !skipped.is_empty() {
            debug!(?skipped, "Skipped unknown sections");
        }
        skipped
    }
}
