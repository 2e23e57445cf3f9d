//! Whole-section ordering of the preview.
//!
//! The sidebar lets a user drag entire preview sections around. That order
//! is presentation state only: it never reaches the document, and it is
//! re-applied to every freshly projected preview.

use crate::vdom::PreviewDocument;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Movable section blocks below the fixed header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Summary,
    Experience,
    Education,
    Skills,
    CustomSections,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// Default display order
    pub const ALL: [SectionId; 5] = [
        SectionId::Summary,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::CustomSections,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::CustomSections => "custom-sections",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Current arrangement of preview sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout {
    order: Vec<SectionId>,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            order: SectionId::ALL.to_vec(),
        }
    }
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    /// Re-append sections in the given order.
    ///
    /// Each listed id moves to the end, so listed sections end up last in
    /// listed order and unlisted ones keep their relative order ahead of
    /// them. Unknown ids are skipped. Returns the ids that were skipped.
    pub fn arrange<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut skipped = Vec::new();
        for raw in ids {
            match raw.parse::<SectionId>() {
                Ok(id) => {
                    self.order.retain(|existing| *existing != id);
                    self.order.push(id);
                }
                Err(_) => skipped.push(raw.to_string()),
            }
        }
        skipped
    }

    /// Sort a projected preview's sections into this arrangement
    pub fn apply(&self, preview: &mut PreviewDocument) {
        preview.sections.sort_by_key(|section| {
            self.order
                .iter()
                .position(|id| *id == section.id)
                .unwrap_or(usize::MAX)
        });
    }
}
