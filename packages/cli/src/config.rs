use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "resume.config.json";
pub const DEFAULT_DOCUMENT_NAME: &str = "resume.json";

/// resume configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Starting document; the seeded document when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    /// Exported HTML page
    #[serde(default = "default_out_file")]
    pub out_file: String,

    /// Initial sidebar order of preview sections
    #[serde(default)]
    pub section_order: Vec<String>,

    /// Preview zoom in percent
    #[serde(default = "default_zoom")]
    pub zoom: u16,

    /// Pretty print exported HTML
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_out_file() -> String {
    "resume.html".to_string()
}

fn default_zoom() -> u16 {
    100
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_document_path(&self, cwd: &str) -> Option<PathBuf> {
        self.document
            .as_ref()
            .map(|document| PathBuf::from(cwd).join(document))
    }

    pub fn get_out_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: None,
            out_file: default_out_file(),
            section_order: vec![],
            zoom: default_zoom(),
            pretty: default_pretty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "document": "cv.json",
            "outFile": "out/cv.html",
            "sectionOrder": ["skills", "summary"],
            "zoom": 120,
            "pretty": false
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.document, Some("cv.json".to_string()));
        assert_eq!(config.out_file, "out/cv.html");
        assert_eq!(config.section_order, vec!["skills", "summary"]);
        assert_eq!(config.zoom, 120);
        assert!(!config.pretty);
        assert_eq!(
            config.get_document_path("/work"),
            Some(PathBuf::from("/work/cv.json"))
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.out_file, "resume.html");
        assert_eq!(config.zoom, 100);
        assert!(config.pretty);
        assert!(config.get_document_path("/work").is_none());
    }
}
