//! # Render Coordination
//!
//! Decides, from the [`Change`] a mutation produced, which views must be
//! regenerated. Field edits never rebuild form controls, so the control
//! the user is typing into survives. Structural changes rebuild the one
//! affected form list. Anything that alters the document rebuilds the
//! preview.

use resume_model::{Change, CollectionKind};
use serde::Serialize;
use std::fmt;

/// Views to regenerate after one mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    /// Form list to rebuild, if any
    pub form: Option<CollectionKind>,
    pub preview: bool,
}

impl RenderPlan {
    pub const NOTHING: RenderPlan = RenderPlan {
        form: None,
        preview: false,
    };

    pub fn for_change(change: &Change) -> Self {
        match change {
            Change::ProfileField { .. } | Change::Reordered { .. } => RenderPlan {
                form: None,
                preview: true,
            },
            // The icon select drives the card header, so that list is rebuilt
            Change::EntryField { field, .. } => RenderPlan {
                form: field.is_icon().then(|| field.collection()),
                preview: true,
            },
            Change::Added { collection, .. } | Change::Removed { collection, .. } => RenderPlan {
                form: Some(*collection),
                preview: true,
            },
            Change::Unchanged => RenderPlan::NOTHING,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.form.is_none() && !self.preview
    }
}

impl fmt::Display for RenderPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.form, self.preview) {
            (None, false) => f.write_str("nothing"),
            (None, true) => f.write_str("preview"),
            (Some(form), false) => write!(f, "form({})", form),
            (Some(form), true) => write!(f, "form({}) + preview", form),
        }
    }
}
