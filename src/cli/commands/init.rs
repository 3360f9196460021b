//! `init`: write a default configuration at the project root.

use std::{env, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{
    CONFIG_FILE_NAME, Config, default_config_json, find_config_file, find_project_root,
};

/// Create `.unusedi18nrc.json` next to the nearest `.git`, or in the
/// working directory outside a repository.
///
/// Fails without touching anything when `analyze` would already pick up a
/// config file from here.
pub fn init() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    if let Some(existing) = find_config_file(&cwd) {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            existing.display()
        );
        return Ok(ExitStatus::Failure);
    }

    let root = find_project_root(&cwd);
    let config_path = root.join(CONFIG_FILE_NAME);
    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    let paths = Config::default().resolve_paths(&root);
    println!(
        "{} Created {}",
        SUCCESS_MARK.green(),
        config_path.display()
    );
    println!("  Source directory:     {}", paths.source_root.display());
    println!("  English translations: {}", paths.en_messages.display());
    println!("  Turkish translations: {}", paths.tr_messages.display());
    println!("  Report file:          {}", paths.report_path.display());

    Ok(ExitStatus::Success)
}
