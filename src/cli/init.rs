use crate::models::{DeskConfig, CONFIG_FILE};
use crate::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Write a default `lpgdesk.toml` into the current directory
pub fn run(force: bool) -> Result<()> {
    let project_root = std::env::current_dir()?;
    write_default(&project_root, force)?;
    Ok(())
}

/// Write a default config into `dir`
///
/// Returns the path written, or `None` when a config already exists and
/// `force` is not set.
pub fn write_default(dir: &Path, force: bool) -> Result<Option<PathBuf>> {
    let path = dir.join(CONFIG_FILE);

    if path.exists() && !force {
        println!("{}", format!("⚠️  {} already exists", CONFIG_FILE).yellow());
        println!("   Run with --force to overwrite");
        return Ok(None);
    }

    DeskConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{}", format!("✓ Wrote {}", path.display()).green());
    Ok(Some(path))
}
