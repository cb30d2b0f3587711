//! Generate TypeScript artifacts from schema files.

use super::Project;
use anyhow::Context;
use clap::Args;
use monkko_typegen::TemplateSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Config file (defaults to ./monkko.config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides `outputDir` from the config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// What a generate run produced.
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub sources: usize,
    pub schemas: usize,
    pub files: Vec<PathBuf>,
}

pub fn generate(cwd: &Path, args: &GenerateArgs) -> anyhow::Result<Summary> {
    let project = Project::load(cwd, args.config.as_deref())?;
    let output_dir = match &args.output_dir {
        Some(dir) => cwd.join(dir),
        None => project.root.join(&project.config.output_dir),
    };

    let sources = project.schema_files()?;
    info!(count = sources.len(), "found schema files");
    if sources.is_empty() {
        return Ok(Summary {
            sources: 0,
            schemas: 0,
            files: Vec::new(),
        });
    }

    let schemas =
        monkko_extract::extract_parallel(&sources).context("failed to extract schemas")?;
    let rendered = monkko_typegen::render(&schemas, &TemplateSet::standard())
        .context("failed to generate code")?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let mut files = Vec::with_capacity(rendered.len());
    for (name, content) in rendered {
        let path = output_dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote");
        files.push(path);
    }

    Ok(Summary {
        sources: sources.len(),
        schemas: schemas.len(),
        files,
    })
}

pub fn run(cwd: &Path, args: GenerateArgs) -> anyhow::Result<()> {
    let summary = generate(cwd, &args)?;
    if summary.sources == 0 {
        println!("No *.monkko.ts files found");
        return Ok(());
    }
    println!(
        "Generated {} file(s) for {} schema(s)",
        summary.files.len(),
        summary.schemas
    );
    for file in &summary.files {
        println!("  {}", file.display());
    }
    Ok(())
}
