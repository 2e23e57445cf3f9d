//! Serializable user events, for hosts that replay or forward them.

use crate::form::Panel;
use resume_model::{CollectionKind, Mutation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SessionEvent {
    /// A mutation issued directly, bypassing form elements
    Mutate { mutation: Mutation },

    /// A form card was dropped at a new position
    #[serde(rename_all = "camelCase")]
    DragEnd {
        collection: CollectionKind,
        old_index: usize,
        new_index: usize,
    },

    /// Sidebar order of preview sections
    ArrangeSections { order: Vec<String> },

    /// Positive steps zoom in
    Zoom { steps: i32 },

    TogglePanel { panel: Panel },

    Export,
}
