//! Export of the rendered preview.
//!
//! The session hands its current preview to an injected [`Exporter`]; what
//! happens next (a file, a print dialog, a host callback) is up to the
//! implementation.

use resume_preview::{render_page, PreviewDocument, RenderOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives the preview when the user asks for an export
pub trait Exporter {
    fn export(&mut self, preview: &PreviewDocument) -> Result<(), ExportError>;
}

impl<F> Exporter for F
where
    F: FnMut(&PreviewDocument) -> Result<(), ExportError>,
{
    fn export(&mut self, preview: &PreviewDocument) -> Result<(), ExportError> {
        self(preview)
    }
}

/// Writes the preview as a standalone HTML page
#[derive(Debug, Clone)]
pub struct HtmlFileExporter {
    path: PathBuf,
    options: RenderOptions,
}

impl HtmlFileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for HtmlFileExporter {
    fn export(&mut self, preview: &PreviewDocument) -> Result<(), ExportError> {
        let html = render_page(preview, &self.options);
        std::fs::write(&self.path, html)?;
        info!(path = %self.path.display(), "Exported preview");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_model::Document;
    use resume_preview::project;

    #[test]
    fn test_closure_exporter() {
        let mut pages = Vec::new();
        let mut exporter = |preview: &PreviewDocument| {
            pages.push(render_page(preview, &RenderOptions::compact()));
            Ok::<(), ExportError>(())
        };
        exporter.export(&project(&Document::seeded())).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Software Developer at Web Corp"));
    }

    #[test]
    fn test_html_file_exporter_writes_page() {
        let path = std::env::temp_dir().join(format!("resume-export-{}.html", std::process::id()));
        let mut exporter = HtmlFileExporter::new(&path);
        exporter.export(&project(&Document::seeded())).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        std::fs::remove_file(&path).unwrap();
    }
}
