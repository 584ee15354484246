use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "~/.config/lessonmark";
const ANNOTATIONS_FILE: &str = "annotations.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding `curriculum.json` and the `content/` tree.
    pub content_root: PathBuf,
    /// Class whose chapters are read, e.g. `2nde`.
    pub class_id: String,
    /// Chapter opened at startup; the first active one when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
    /// Where annotations are persisted; next to the config file when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_path: Option<PathBuf>,
    /// Let math blanks carry their id and class into rendered formulas.
    /// Only safe for content you authored.
    #[serde(default = "default_trust")]
    pub trust_math_directives: bool,
}

fn default_trust() -> bool {
    true
}

impl Config {
    pub fn new(content_root: impl Into<PathBuf>, class_id: impl Into<String>) -> Self {
        Self {
            content_root: content_root.into(),
            class_id: class_id.into(),
            chapter_id: None,
            state_path: None,
            trust_math_directives: default_trust(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.content_root =
            Self::expand_path(&config.content_root).unwrap_or(config.content_root);
        config.state_path = config
            .state_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_dir() -> PathBuf {
        PathBuf::from(shellexpand::tilde(APP_DIR).as_ref())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// File the annotation store is read from and written to.
    pub fn annotations_path(&self) -> PathBuf {
        self.state_path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join(ANNOTATIONS_FILE))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
