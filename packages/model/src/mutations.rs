//! # Mutations
//!
//! The only sanctioned way to change a [`Document`].
//!
//! ## Mutation Semantics
//!
//! ### SetProfileField
//! - Atomic replacement of one scalar, never fails
//!
//! ### AddEntry
//! - Appends a default entry with id `max + 1` (1 when empty)
//!
//! ### RemoveEntry / UpdateEntryField
//! - Keyed on identity; an absent id is a no-op, not an error
//! - Remaining entries keep their ids and order
//!
//! ### ReorderEntry
//! - Removes at `old_index`, reinserts at `new_index`
//! - Equal indices are a no-op, indices outside `[0, len)` fail
//!
//! Each call reports a [`Change`]. Renderers decide what to rebuild from the
//! kind of change, not from the fact that something changed.

use crate::document::{Document, ProfileField};
use crate::entry::{CollectionKind, EntryField, EntryId};
use crate::errors::MutationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Semantic mutations on a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    #[serde(rename_all = "camelCase")]
    SetProfileField { field: ProfileField, value: String },

    #[serde(rename_all = "camelCase")]
    AddEntry { collection: CollectionKind },

    #[serde(rename_all = "camelCase")]
    RemoveEntry { collection: CollectionKind, id: EntryId },

    /// The field carries its collection
    #[serde(rename_all = "camelCase")]
    UpdateEntryField {
        id: EntryId,
        field: EntryField,
        value: String,
    },

    #[serde(rename_all = "camelCase")]
    ReorderEntry {
        collection: CollectionKind,
        old_index: usize,
        new_index: usize,
    },
}

/// What a mutation actually changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Change {
    ProfileField { field: ProfileField },

    EntryField { id: EntryId, field: EntryField },

    Added { collection: CollectionKind, id: EntryId },

    Removed { collection: CollectionKind, id: EntryId },

    #[serde(rename_all = "camelCase")]
    Reordered {
        collection: CollectionKind,
        old_index: usize,
        new_index: usize,
    },

    /// The mutation was a no-op (absent id, equal reorder indices)
    Unchanged,
}

impl Change {
    /// Add or remove: the collection's item set changed
    pub fn is_structural(&self) -> bool {
        matches!(self, Change::Added { .. } | Change::Removed { .. })
    }

    pub fn collection(&self) -> Option<CollectionKind> {
        match self {
            Change::ProfileField { .. } | Change::Unchanged => None,
            Change::EntryField { field, .. } => Some(field.collection()),
            Change::Added { collection, .. }
            | Change::Removed { collection, .. }
            | Change::Reordered { collection, .. } => Some(*collection),
        }
    }
}

impl Mutation {
    pub fn collection(&self) -> Option<CollectionKind> {
        match self {
            Mutation::SetProfileField { .. } => None,
            Mutation::AddEntry { collection }
            | Mutation::RemoveEntry { collection, .. }
            | Mutation::ReorderEntry { collection, .. } => Some(*collection),
            Mutation::UpdateEntryField { field, .. } => Some(field.collection()),
        }
    }
}

impl Document {
    /// Apply a mutation and classify what it changed
    pub fn apply(&mut self, mutation: &Mutation) -> Result<Change, MutationError> {
        let change = match mutation {
            Mutation::SetProfileField { field, value } => {
                self.set_profile_field(*field, value.clone())
            }
            Mutation::AddEntry { collection } => self.add_entry(*collection),
            Mutation::RemoveEntry { collection, id } => self.remove_entry(*collection, *id),
            Mutation::UpdateEntryField { id, field, value } => {
                self.update_entry_field(*id, *field, value.clone())
            }
            Mutation::ReorderEntry {
                collection,
                old_index,
                new_index,
            } => self.reorder_entry(*collection, *old_index, *new_index)?,
        };

        debug!(?mutation, ?change, "Applied mutation");
        Ok(change)
    }

    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) -> Change {
        *self.profile.slot_mut(field) = value.into();
        Change::ProfileField { field }
    }

    pub fn add_entry(&mut self, collection: CollectionKind) -> Change {
        let id = match collection {
            CollectionKind::Experience => self.experience.add(),
            CollectionKind::Education => self.education.add(),
            CollectionKind::CustomSections => self.custom_sections.add(),
        };
        match id {
            Some(id) => Change::Added { collection, id },
            None => {
                warn!(%collection, "No identity left above the current maximum");
                Change::Unchanged
            }
        }
    }

    pub fn remove_entry(&mut self, collection: CollectionKind, id: EntryId) -> Change {
        let removed = match collection {
            CollectionKind::Experience => self.experience.remove(id),
            CollectionKind::Education => self.education.remove(id),
            CollectionKind::CustomSections => self.custom_sections.remove(id),
        };

        if removed {
            Change::Removed { collection, id }
        } else {
            Change::Unchanged
        }
    }

    pub fn update_entry_field(
        &mut self,
        id: EntryId,
        field: EntryField,
        value: impl Into<String>,
    ) -> Change {
        let value = value.into();
        let updated = match field {
            EntryField::Experience(f) => self.experience.update(id, f, value),
            EntryField::Education(f) => self.education.update(id, f, value),
            EntryField::CustomSections(f) => self.custom_sections.update(id, f, value),
        };

        if updated {
            Change::EntryField { id, field }
        } else {
            Change::Unchanged
        }
    }

    pub fn reorder_entry(
        &mut self,
        collection: CollectionKind,
        old_index: usize,
        new_index: usize,
    ) -> Result<Change, MutationError> {
        let moved = match collection {
            CollectionKind::Experience => self.experience.reorder(old_index, new_index)?,
            CollectionKind::Education => self.education.reorder(old_index, new_index)?,
            CollectionKind::CustomSections => self.custom_sections.reorder(old_index, new_index)?,
        };

        Ok(if moved {
            Change::Reordered {
                collection,
                old_index,
                new_index,
            }
        } else {
            Change::Unchanged
        })
    }
}
