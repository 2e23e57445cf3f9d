//! Ordered, identity-keyed entry collections.
//!
//! A collection is a flat sequence: membership and order are its only
//! structure. Writes are crate-private so they can only arrive through the
//! mutation API on [`crate::Document`].

use crate::entry::{Entry, EntryId};
use crate::errors::{DocumentError, MutationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    entries: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Entry> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<T>) -> Result<Self, DocumentError> {
        let collection = Self { entries };
        collection.validate()?;
        Ok(collection)
    }

    /// Check that no identity appears twice
    pub(crate) fn validate(&self) -> Result<(), DocumentError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id()) {
                return Err(DocumentError::DuplicateId {
                    collection: T::KIND,
                    id: entry.id(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Identities in collection order
    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(Entry::id).collect()
    }

    /// Identity the next added entry will receive; `None` once the id space
    /// above the current maximum is exhausted
    pub fn next_id(&self) -> Option<EntryId> {
        match self.entries.iter().map(Entry::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub(crate) fn add(&mut self) -> Option<EntryId> {
        let id = self.next_id()?;
        self.entries.push(T::blank(id));
        Some(id)
    }

    pub(crate) fn remove(&mut self, id: EntryId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn update(&mut self, id: EntryId, field: T::Field, value: String) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                entry.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Move the entry at `old_index` to `new_index`.
    ///
    /// Returns `Ok(false)` when the indices are equal.
    pub(crate) fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<bool, MutationError> {
        let len = self.entries.len();
        for index in [old_index, new_index] {
            if index >= len {
                return Err(MutationError::IndexOutOfRange {
                    collection: T::KIND,
                    index,
                    len,
                });
            }
        }

        if old_index == new_index {
            return Ok(false);
        }

        let entry = self.entries.remove(old_index);
        self.entries.insert(new_index, entry);
        Ok(true)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
