//! Error types for the document model

use crate::entry::{CollectionKind, EntryId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Index {index} out of range for {collection} (len {len})")]
    IndexOutOfRange {
        collection: CollectionKind,
        index: usize,
        len: usize,
    },
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: CollectionKind, id: EntryId },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A field or collection name that does not exist
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {name}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}
