use crate::config::{Config, DEFAULT_CONFIG_NAME, DEFAULT_DOCUMENT_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use resume_model::Document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Exported HTML file
    #[arg(short, long, default_value = "resume.html")]
    pub out_file: String,

    /// Start from an empty document instead of the sample one
    #[arg(long)]
    pub empty: bool,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing résumé project...".bright_blue().bold());

    let document_path = PathBuf::from(cwd).join(DEFAULT_DOCUMENT_NAME);
    if !document_path.exists() || args.force {
        let document = if args.empty {
            Document::new()
        } else {
            Document::seeded()
        };
        fs::write(&document_path, document.to_json_pretty()?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_DOCUMENT_NAME);
    }

    let config = Config {
        document: Some(DEFAULT_DOCUMENT_NAME.to_string()),
        out_file: args.out_file.clone(),
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", DEFAULT_DOCUMENT_NAME);
    println!("  2. Run: resume render");
    println!("  3. Open {}", args.out_file);

    Ok(())
}
