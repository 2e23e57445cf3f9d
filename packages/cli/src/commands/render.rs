use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use resume_editor::{EditSession, HtmlFileExporter, RenderOptions, SessionEvent};
use resume_model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document JSON (overrides config)
    #[arg(short, long)]
    pub document: Option<String>,

    /// JSON array of session events to replay before rendering
    #[arg(short, long)]
    pub events: Option<String>,

    /// Output file (overrides config)
    #[arg(short, long)]
    pub out_file: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Print which views each replayed event regenerated
    #[arg(long)]
    pub plan: bool,

    /// Emit compact HTML
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let document_path = match &args.document {
        Some(path) => Some(PathBuf::from(cwd).join(path)),
        None => config.get_document_path(cwd),
    };
    let document = match &document_path {
        Some(path) => load_document(path)?,
        None => Document::seeded(),
    };

    let out_path = match &args.out_file {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_out_path(cwd),
    };
    let options = RenderOptions {
        pretty: config.pretty && !args.compact,
        ..RenderOptions::default()
    };

    let mut session = EditSession::new(document)
        .with_exporter(HtmlFileExporter::new(&out_path).with_options(options.clone()));
    session.set_zoom(config.zoom);

    let skipped = session.on_sections_arranged(config.section_order.iter().map(String::as_str));
    for id in skipped {
        warn!(section = %id, "Unknown section in sectionOrder");
    }

    if let Some(events_path) = &args.events {
        let events = load_events(&PathBuf::from(cwd).join(events_path))?;
        if !args.stdout {
            println!(
                "{} {} events",
                "🔁 Replaying".bright_blue().bold(),
                events.len()
            );
        }

        for (index, event) in events.into_iter().enumerate() {
            let label = event_label(&event);
            let plan = session
                .dispatch(event)
                .with_context(|| format!("event {} ({}) failed", index, label))?;
            if args.plan {
                // Plans go to stderr so --stdout output stays a clean page
                eprintln!("  {:>3} {:<16} {}", index, label, plan.to_string().dimmed());
            }
        }
    }

    if args.stdout {
        print!("{}", session.preview().html(&options));
        return Ok(());
    }

    session.export()?;
    println!(
        "  {} {} → {} (zoom {})",
        "✓".green(),
        document_path
            .as_deref()
            .map_or_else(|| "sample document".to_string(), |p| p.display().to_string()),
        out_path.display(),
        session.preview().zoom().label()
    );

    Ok(())
}

fn load_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read document {}", path.display()))?;
    let document = Document::from_json(&source)
        .with_context(|| format!("invalid document {}", path.display()))?;
    Ok(document)
}

fn load_events(path: &Path) -> Result<Vec<SessionEvent>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read events {}", path.display()))?;
    let events = serde_json::from_str(&source)
        .with_context(|| format!("invalid events {}", path.display()))?;
    Ok(events)
}

fn event_label(event: &SessionEvent) -> &'static str {
    match event {
        SessionEvent::Mutate { .. } => "mutate",
        SessionEvent::DragEnd { .. } => "dragEnd",
        SessionEvent::ArrangeSections { .. } => "arrangeSections",
        SessionEvent::Zoom { .. } => "zoom",
        SessionEvent::TogglePanel { .. } => "togglePanel",
        SessionEvent::Export => "export",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("resume-cli-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_render_replays_events_into_file() {
        let dir = scratch_dir("render");
        fs::write(
            dir.join("events.json"),
            r#"[
                {"event": "mutate", "mutation": {"op": "setProfileField", "field": "fullName", "value": "Ada Lovelace"}},
                {"event": "dragEnd", "collection": "experience", "oldIndex": 1, "newIndex": 0}
            ]"#,
        )
        .unwrap();

        let args = RenderArgs {
            document: None,
            events: Some("events.json".to_string()),
            out_file: Some("out.html".to_string()),
            stdout: false,
            plan: true,
            compact: true,
        };
        render(args, dir.to_str().unwrap()).unwrap();

        let html = fs::read_to_string(dir.join("out.html")).unwrap();
        assert!(html.contains("Ada Lovelace"));
        let developer = html.find("Software Developer at Web Corp").unwrap();
        let senior = html.find("Senior Software Engineer at Tech Solutions Inc.").unwrap();
        assert!(developer < senior);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failing_event_reports_index() {
        let dir = scratch_dir("failing");
        fs::write(
            dir.join("events.json"),
            r#"[{"event": "dragEnd", "collection": "education", "oldIndex": 0, "newIndex": 9}]"#,
        )
        .unwrap();

        let args = RenderArgs {
            document: None,
            events: Some("events.json".to_string()),
            out_file: None,
            stdout: true,
            plan: false,
            compact: false,
        };
        let err = render(args, dir.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("event 0 (dragEnd)"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
