//! # Resume Model
//!
//! Canonical résumé document and the mutation API that owns every write to it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document + Mutation API              │
//! │  - Profile scalars                          │
//! │  - Identity-keyed, ordered collections      │
//! │  - Mutations classify what they changed     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ preview: Document → PreviewDocument (VDOM)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: form view, render coordinator,      │
//! │         reorder adapter, edit session       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: form and preview are derived views
//! 2. **Identities are per collection**: next id is `max + 1`, or 1 when empty
//! 3. **Order is authoritative**: views render collections in stored order
//! 4. **Every mutation reports a [`Change`]**: renderers decide from it
//!
//! ## Usage
//!
//! ```rust
//! use resume_model::{CollectionKind, Document, ExperienceField, EntryField};
//!
//! let mut doc = Document::new();
//! doc.add_entry(CollectionKind::Experience);
//! doc.update_entry_field(1, EntryField::Experience(ExperienceField::Title), "Engineer");
//! assert_eq!(doc.experience().get(1).unwrap().title, "Engineer");
//! ```

mod collection;
mod document;
mod entry;
mod errors;
mod mutations;

pub use collection::Collection;
pub use document::{Document, Profile, ProfileField};
pub use entry::{
    CollectionKind, CustomSection, CustomSectionField, Education, EducationField, Entry, EntryField,
    EntryId, Experience, ExperienceField, DEFAULT_ICON, ICON_OPTIONS, NEW_SECTION_TITLE,
};
pub use errors::{DocumentError, MutationError, UnknownName};
pub use mutations::{Change, Mutation};
