//! Initialize monkko in a project directory.

use crate::config::{CONFIG_FILE, Config};
use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::Path;

const GITIGNORE_HEADER: &str = "# Monkko generated types";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output directory written to the new config
    #[arg(long, default_value = "generated")]
    pub output_dir: String,
}

/// Write a starter config and ignore the output directory. Returns the list
/// of changes made.
pub fn init(root: &Path, args: &InitArgs) -> anyhow::Result<Vec<String>> {
    let mut changes = Vec::new();

    let config_path = root.join(CONFIG_FILE);
    let output_dir = if config_path.exists() {
        // Keep the existing file; ignore whatever directory it writes to.
        Config::load(&config_path)?.output_dir
    } else {
        let config = Config::starter(&args.output_dir);
        let content = serde_json::to_string_pretty(&config)? + "\n";
        fs::write(&config_path, content)
            .with_context(|| format!("failed to create {CONFIG_FILE}"))?;
        changes.push(format!("Created {CONFIG_FILE}"));
        config.output_dir
    };

    let gitignore_path = root.join(".gitignore");
    if update_gitignore(&gitignore_path, &output_dir)? {
        changes.push(format!("Added '{output_dir}' to .gitignore"));
    }

    Ok(changes)
}

pub fn run(cwd: &Path, args: InitArgs) -> anyhow::Result<()> {
    let changes = init(cwd, &args)?;
    if changes.is_empty() {
        println!("Already initialized.");
    } else {
        println!("Initialized monkko:");
        for change in &changes {
            println!("  {change}");
        }
        println!();
        println!("Next steps:");
        println!("  1. Create a schema file (*.monkko.ts)");
        println!("  2. Run `monkko generate`");
    }
    Ok(())
}

/// Append `output_dir` to .gitignore unless it is already listed. Returns
/// whether the file changed.
fn update_gitignore(path: &Path, output_dir: &str) -> anyhow::Result<bool> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err).context("failed to read .gitignore"),
    };

    let entry = output_dir.trim_end_matches('/');
    let listed = content.lines().map(str::trim).any(|line| {
        let line = line.trim_end_matches('/');
        line == entry || line.strip_prefix('/') == Some(entry)
    });
    if listed {
        return Ok(false);
    }

    let mut new_content = content;
    if !new_content.is_empty() {
        if !new_content.ends_with('\n') {
            new_content.push('\n');
        }
        new_content.push('\n');
    }
    new_content.push_str(GITIGNORE_HEADER);
    new_content.push('\n');
    new_content.push_str(entry);
    new_content.push('\n');

    fs::write(path, new_content).context("failed to update .gitignore")?;
    Ok(true)
}
