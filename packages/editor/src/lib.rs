//! # Resume Editor
//!
//! Keeps the two views of a résumé in step with the document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document + mutations → Change        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Route form events to mutations           │
//! │  - Classify each Change into a RenderPlan   │
//! │  - Rebuild only the affected form list      │
//! │  - Keep view-only state (focus, zoom, ...)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ preview: Document → PreviewDocument → HTML  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: both views are derived and disposable
//! 2. **Field edits never rebuild controls**: the focused input survives typing
//! 3. **Structural edits rebuild one list**: other collections keep their elements
//! 4. **Preview is always rebuilt whole**: there is no diffing
//!
//! ## Usage
//!
//! ```rust
//! use resume_editor::{EditSession, RenderPlan};
//! use resume_model::{CollectionKind, Document, ExperienceField, EntryField};
//!
//! let mut session = EditSession::new(Document::seeded());
//! let card = &session.form().list(CollectionKind::Experience).cards()[0];
//! let description = card
//!     .input(EntryField::Experience(ExperienceField::Description))
//!     .unwrap()
//!     .handle;
//!
//! session.focus(description).unwrap();
//! let change = session.input(description, "Shipped things").unwrap();
//!
//! assert_eq!(RenderPlan::for_change(&change).form, None);
//! assert_eq!(session.focused(), Some(description));
//! ```

mod coordinator;
mod errors;
mod events;
mod export;
mod form;
mod preview_view;
mod reorder;
mod session;

pub use coordinator::RenderPlan;
pub use errors::EditorError;
pub use events::SessionEvent;
pub use export::{ExportError, Exporter, HtmlFileExporter};
pub use form::{
    Binding, CardHeader, Control, ElementHandle, FormButton, FormCard, FormElement, FormInput,
    FormList, FormView, HandleAllocator, Panel,
};
pub use preview_view::{PreviewView, Zoom};
pub use reorder::DragEvent;
pub use session::EditSession;

// Re-export common types for convenience
pub use resume_model::{Change, Document, Mutation};
pub use resume_preview::{PreviewDocument, RenderOptions};
