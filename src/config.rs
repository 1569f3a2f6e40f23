use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".wordfind.toml";

/// Configuration for the wordfind host
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub keys: KeyConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Where the word/definition table comes from
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DatasetConfig {
    /// JSON file holding a flat `{ "word": "definition" }` object.
    /// Relative paths resolve against the directory the config was found in
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl DatasetConfig {
    pub fn resolve(&self, root: Option<&Path>) -> PathBuf {
        let path = Path::new(&self.path);
        match root {
            Some(root) if !path.is_absolute() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Key names (as the host reports them) bound to controller actions
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct KeyConfig {
    #[serde(default = "default_confirm_key")]
    pub confirm: String,

    #[serde(default = "default_next_key")]
    pub next: String,

    #[serde(default = "default_previous_key")]
    pub previous: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            confirm: default_confirm_key(),
            next: default_next_key(),
            previous: default_previous_key(),
        }
    }
}

/// How highlighted list items are turned into markup
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Inserted before the matched part of a word
    #[serde(default = "default_emphasis_open")]
    pub emphasis_open: String,

    /// Inserted after the matched part of a word
    #[serde(default = "default_emphasis_close")]
    pub emphasis_close: String,

    /// Escape `<`, `>`, `&`, `"` and `'` in word text before wrapping it
    #[serde(default = "default_true")]
    pub escape_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            emphasis_open: default_emphasis_open(),
            emphasis_close: default_emphasis_close(),
            escape_html: default_true(),
        }
    }
}

fn default_dataset_path() -> String {
    "dictionary.json".to_string()
}

fn default_confirm_key() -> String {
    "Enter".to_string()
}

fn default_next_key() -> String {
    "ArrowDown".to_string()
}

fn default_previous_key() -> String {
    "ArrowUp".to_string()
}

fn default_emphasis_open() -> String {
    "<strong>".to_string()
}

fn default_emphasis_close() -> String {
    "</strong>".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load config from default locations:
    /// 1. .wordfind.toml in the given directory
    /// 2. Default config if not found
    pub fn load_from_dir(dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                match Self::from_file(&config_path) {
                    Ok(config) => {
                        log_debug!("Loaded config from {:?}", config_path);
                        return config;
                    }
                    Err(e) => {
                        log_debug!("Failed to load config from {:?}: {}", config_path, e);
                    }
                }
            }
        }
        log_debug!("Using default configuration");
        Self::default()
    }
}
