use anyhow::{Context, Result};
use nimbus_core::expand_tilde;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const HISTORY_FILE: &str = "history";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct HistoryConfig {
    /// History file; `<workspace>/history` when unset
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub colors: bool,
    pub page_size: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            colors: true,
            page_size: 0,
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn history_path(&self, workspace: &Path) -> PathBuf {
        match &self.history.file {
            Some(file) => workspace.join(expand_tilde(file)),
            None => workspace.join(HISTORY_FILE),
        }
    }
}
