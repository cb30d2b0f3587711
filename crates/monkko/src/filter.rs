//! Exclude patterns.
//!
//! Patterns use gitignore syntax (`node_modules`, `src/legacy/`, `*.draft.monkko.ts`)
//! and match paths relative to the project root.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
#[error("invalid exclude pattern '{pattern}'")]
pub struct PatternError {
    pub pattern: String,
    pub source: ignore::Error,
}

#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    matcher: Gitignore,
}

impl ExcludeFilter {
    pub fn new(patterns: &[String]) -> Result<Self, PatternError> {
        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            builder
                .add_line(None, pattern)
                .map_err(|source| PatternError {
                    pattern: pattern.clone(),
                    source,
                })?;
        }
        let matcher = builder.build().map_err(|source| PatternError {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(Self { matcher })
    }

    pub fn is_excluded(&self, relative: &Path, is_dir: bool) -> bool {
        self.matcher.matched(relative, is_dir).is_ignore()
    }
}
