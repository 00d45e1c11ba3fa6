use crate::config::{CONFIG_FILE, Config};
use crate::presentation::Style;
use crate::types::OutputFormat;
use anyhow::Result;
use nimbus_core::History;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Per-invocation state shared by the handlers.
pub struct ExecutionContext {
    workspace: PathBuf,
    config: OnceCell<Config>,
    pub format: OutputFormat,
    pub no_color: bool,
}

impl ExecutionContext {
    pub fn new(workspace: PathBuf, format: OutputFormat, no_color: bool) -> Self {
        Self {
            workspace,
            config: OnceCell::new(),
            format,
            no_color,
        }
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.workspace.join(CONFIG_FILE);
            Config::load_from(&config_path)
        })
    }

    pub fn history(&self) -> Result<History> {
        let path = self.config()?.history_path(&self.workspace);
        Ok(History::new(path))
    }

    pub fn style(&self) -> Result<Style> {
        Ok(Style::detect(self.config()?.output.colors, self.no_color))
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
