use designable_editor::{SessionOptions, DEFAULT_HISTORY_LIMIT};
use designable_registry::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "designable.config.json";

/// Designable configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Number of undo levels kept per session (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// UI language for labels
    #[serde(default = "default_language")]
    pub language: String,

    /// Layout file used when a command is given no tree path
    #[serde(default = "default_tree_file")]
    pub tree_file: String,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_tree_file() -> String {
    "layout.json".to_string()
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

    /// Resolve a tree path argument, falling back to the configured file
    pub fn tree_path(&self, cwd: &str, explicit: Option<&PathBuf>) -> PathBuf {
        let base = PathBuf::from(cwd);
        match explicit {
            Some(path) => base.join(path),
            None => base.join(&self.tree_file),
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            history_limit: self.history_limit,
            language: Some(self.language.clone()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            language: default_language(),
            tree_file: default_tree_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "historyLimit": 10,
            "language": "en-us",
            "treeFile": "pages/home.json"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.language, "en-us");
        assert_eq!(config.tree_file, "pages/home.json");
        assert_eq!(config.session_options().history_limit, 10);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "language": "en-us" }"#).unwrap();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.tree_file, "layout.json");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.language, "zh-cn");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["treeFile"], "layout.json");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_tree_path() {
        let config = Config::default();
        assert_eq!(config.tree_path("/work", None), PathBuf::from("/work/layout.json"));
        assert_eq!(
            config.tree_path("/work", Some(&PathBuf::from("other.json"))),
            PathBuf::from("/work/other.json")
        );
    }
}
