//! Print extracted schemas as JSON.

use super::Project;
use anyhow::Context;
use clap::Args;
use monkko_extract::Schema;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Config file (defaults to ./monkko.config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ExtractReport {
    pub files: Vec<String>,
    pub schemas: Vec<Schema>,
}

pub fn report(cwd: &Path, args: &ExtractArgs) -> anyhow::Result<ExtractReport> {
    let project = Project::load(cwd, args.config.as_deref())?;
    let files = project.schema_files()?;
    let schemas = monkko_extract::extract_parallel(&files).context("failed to extract schemas")?;
    Ok(ExtractReport {
        files: files.iter().map(|f| project.display_path(f)).collect(),
        schemas,
    })
}

pub fn run(cwd: &Path, args: ExtractArgs) -> anyhow::Result<()> {
    let report = report(cwd, &args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
