//! CLI command implementations - one module per top-level command.

use crate::config::{CONFIG_FILE, Config};
use crate::finder::find_schema_files;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub mod extract;
pub mod generate;
pub mod init;

/// A loaded configuration and the directory its relative paths resolve against.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Load `config` (or `monkko.config.json` in `cwd`). The project root is
    /// the directory containing the config file.
    pub fn load(cwd: &Path, config: Option<&Path>) -> anyhow::Result<Self> {
        let path = match config {
            Some(path) => cwd.join(path),
            None => cwd.join(CONFIG_FILE),
        };
        let config = Config::load(&path)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        tracing::debug!(root = %root.display(), ?config, "loaded config");
        Ok(Self { root, config })
    }

    pub fn schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        find_schema_files(&self.root, &self.config).context("failed to find schema files")
    }

    /// Path of `file` relative to the project root, for display.
    pub fn display_path(&self, file: &Path) -> String {
        file.strip_prefix(&self.root)
            .unwrap_or(file)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
