//! Read-only preview of the document, plus its view-only state.

use resume_model::Document;
use resume_preview::{project, render_page, PreviewDocument, RenderOptions, SectionLayout};
use serde::Serialize;
use tracing::debug;

/// Preview scale in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zoom {
    percent: u16,
}

impl Zoom {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 150;
    pub const STEP: u16 = 10;
    pub const DEFAULT: u16 = 100;

    /// Clamped into `MIN..=MAX`
    pub fn new(percent: u16) -> Self {
        Self {
            percent: percent.clamp(Self::MIN, Self::MAX),
        }
    }

    pub fn percent(&self) -> u16 {
        self.percent
    }

    pub fn scale(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }

    /// Move by whole steps; negative steps zoom out
    pub fn adjust(&mut self, steps: i32) {
        let delta = steps.saturating_mul(i32::from(Self::STEP));
        let target = i32::from(self.percent).saturating_add(delta);
        let clamped = target.clamp(i32::from(Self::MIN), i32::from(Self::MAX));
        self.percent = u16::try_from(clamped).unwrap_or(Self::DEFAULT);
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

#[derive(Debug, Clone)]
pub struct PreviewView {
    tree: PreviewDocument,
    layout: SectionLayout,
    zoom: Zoom,
    generation: u64,
}

impl PreviewView {
    pub fn new(doc: &Document) -> Self {
        let layout = SectionLayout::default();
        let mut tree = project(doc);
        layout.apply(&mut tree);
        Self {
            tree,
            layout,
            zoom: Zoom::default(),
            generation: 1,
        }
    }

    /// Rebuild the whole tree, then re-apply the section arrangement
    pub(crate) fn regenerate(&mut self, doc: &Document) {
        let mut tree = project(doc);
        self.layout.apply(&mut tree);
        self.tree = tree;
        self.generation += 1;
        debug!(generation = self.generation, "Regenerated preview");
    }

    /// Re-append sections in the given order; returns skipped ids
    pub(crate) fn arrange<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let skipped = self.layout.arrange(ids);
        self.layout.apply(&mut self.tree);
        skipped
    }

    pub(crate) fn zoom_mut(&mut self) -> &mut Zoom {
        &mut self.zoom
    }

    pub fn tree(&self) -> &PreviewDocument {
        &self.tree
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Bumped on every regeneration; arranging does not count
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn html(&self, options: &RenderOptions) -> String {
        render_page(&self.tree, options)
    }
}
