use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::InitCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default config into `dir`, creating the directory if needed.
///
/// Returns `None` when a config file is already there.
fn write_default_config(dir: &Path) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Ok(None);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(Some(config_path))
}

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let dir = cmd.args.source_root.unwrap_or_else(|| PathBuf::from("."));
    let shown = if dir == Path::new(".") {
        CONFIG_FILE_NAME.to_string()
    } else {
        dir.join(CONFIG_FILE_NAME).display().to_string()
    };

    if write_default_config(&dir)?.is_none() {
        eprintln!("Error: {} already exists", shown);
        return Ok(ExitStatus::Failure);
    }

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", shown).green()
    );

    Ok(ExitStatus::Success)
}
