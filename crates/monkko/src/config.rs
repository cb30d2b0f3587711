//! Project configuration.
//!
//! Loaded from `monkko.config.json` in the project root:
//! ```json
//! {
//!   "outputDir": "generated",
//!   "includes": ["src/schemas/**"],
//!   "excludes": ["node_modules", "dist"]
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "monkko.config.json";

const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Excludes written by `monkko init`.
const INIT_EXCLUDES: &[&str] = &["node_modules", "dist", "build", "coverage", ".next"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no monkko.config.json found in {}. Run `monkko init` to create one", .dir.display())]
    NotFound { dir: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub output_dir: String,
    /// Walk roots; `/**` and `/*` suffixes are accepted. Empty means the
    /// project root.
    pub includes: Vec<String>,
    /// Gitignore-style patterns relative to the project root.
    pub excludes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }
}

impl Config {
    /// Load a config file. A missing file is [`ConfigError::NotFound`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
                return Err(ConfigError::NotFound { dir });
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let mut config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if config.output_dir.is_empty() {
            config.output_dir = DEFAULT_OUTPUT_DIR.to_string();
        }
        Ok(config)
    }

    /// Config written by `monkko init`.
    pub fn starter(output_dir: &str) -> Self {
        Self {
            output_dir: output_dir.to_string(),
            includes: Vec::new(),
            excludes: INIT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Include entries, defaulting to the project root.
    pub fn include_roots(&self) -> Vec<&str> {
        if self.includes.is_empty() {
            vec!["."]
        } else {
            self.includes.iter().map(String::as_str).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_full() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"{ "outputDir": "types/monkko", "includes": ["src/**"], "excludes": ["legacy"] }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_dir, "types/monkko");
        assert_eq!(config.include_roots(), ["src/**"]);
        assert_eq!(config.excludes, ["legacy"]);
    }

    #[test]
    fn test_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "outputDir": "" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir, "generated");
        assert_eq!(config.include_roots(), ["."]);
    }

    #[test]
    fn test_missing_file() {
        let tmp = tempdir().unwrap();
        let err = Config::load(&tmp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("monkko init"));
    }

    #[test]
    fn test_invalid_json() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "{ outputDir: 1 }").unwrap();
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_starter_round_trips_through_json() {
        let config = Config::starter("generated");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"outputDir\""));
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }
}
