//! Error types for the editor

use crate::export::ExportError;
use crate::form::ElementHandle;
use resume_model::{DocumentError, MutationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Unknown element {0}")]
    UnknownElement(ElementHandle),

    #[error("Element {0} does not accept input")]
    NotAnInput(ElementHandle),

    #[error("Element {0} is not a button")]
    NotAButton(ElementHandle),

    #[error("No exporter configured")]
    NoExporter,

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
