//! Schema file discovery.

use crate::config::Config;
use crate::filter::{ExcludeFilter, PatternError};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name suffix of schema sources.
pub const SCHEMA_FILE_SUFFIX: &str = ".monkko.ts";

#[derive(Debug, thiserror::Error)]
pub enum FindError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("failed to walk {}", .root.display())]
    Walk {
        root: PathBuf,
        source: ignore::Error,
    },
}

/// List schema files under the configured include roots, sorted and
/// without duplicates.
///
/// Hidden files are visited, `.gitignore` rules are honoured and `.git` is
/// never entered. Excluded directories are not descended into.
pub fn find_schema_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>, FindError> {
    let filter = ExcludeFilter::new(&config.excludes)?;
    let mut files = BTreeSet::new();

    for include in config.include_roots() {
        let walk_root = match include_dir(include) {
            "." => root.to_path_buf(),
            dir => root.join(dir),
        };
        if !walk_root.exists() {
            warn!(include, "include path does not exist, skipping");
            continue;
        }
        debug!(root = %walk_root.display(), "walking");

        let project_root = root.to_path_buf();
        let filter = filter.clone();
        let walker = WalkBuilder::new(&walk_root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .filter_entry(move |entry| {
                if entry.file_name() == ".git" {
                    return false;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                let relative = entry
                    .path()
                    .strip_prefix(&project_root)
                    .unwrap_or(entry.path());
                relative.as_os_str().is_empty() || !filter.is_excluded(relative, is_dir)
            })
            .build();

        for entry in walker {
            let entry = entry.map_err(|source| FindError::Walk {
                root: walk_root.clone(),
                source,
            })?;
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && is_schema_file(entry.path()) {
                files.insert(entry.into_path());
            }
        }
    }

    debug!(count = files.len(), "found schema files");
    Ok(files.into_iter().collect())
}

/// `src/schemas/**` and `src/schemas/*` both walk `src/schemas`.
fn include_dir(include: &str) -> &str {
    let dir = include.strip_suffix("/**").unwrap_or(include);
    let dir = dir.strip_suffix("/*").unwrap_or(dir);
    match dir {
        "" | "**" | "*" | "./" => ".",
        dir => dir,
    }
}

fn is_schema_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SCHEMA_FILE_SUFFIX))
}
