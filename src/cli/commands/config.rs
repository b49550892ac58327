//! Configuration management commands

use crate::cli::{ConfigCommands, Output};
use crate::config::HookConfig;
use crate::git::GitRepo;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute config commands.
pub async fn execute(cmd: ConfigCommands, config_path: Option<&Path>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path, output),
        ConfigCommands::Validate => validate(config_path, output),
    }
}

/// Print the effective configuration after defaults and overrides merge.
fn show(config_path: Option<&Path>, output: &Output) -> Result<()> {
    let root = GitRepo::discover()
        .and_then(|repo| repo.workdir())
        .unwrap_or_else(|_| std::path::PathBuf::from("."));

    let config = HookConfig::load_or_default(config_path, &root);
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;

    output.header("Effective configuration");
    println!("{rendered}");
    Ok(())
}

/// Parse the configuration file strictly and report the result. Unlike the
/// pipeline's silent fallback, validation surfaces the parse error.
fn validate(config_path: Option<&Path>, output: &Output) -> Result<()> {
    let root = GitRepo::discover()
        .and_then(|repo| repo.workdir())
        .unwrap_or_else(|_| std::path::PathBuf::from("."));

    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => HookConfig::find_config_file(&root),
    };

    let Some(path) = path else {
        output.info("No configuration file found; built-in defaults apply");
        return Ok(());
    };

    match HookConfig::load_from_file(&path) {
        Ok(_) => {
            output.success(&format!("{} is valid", path.display()));
            Ok(())
        }
        Err(err) => {
            output.error(&format!("{err:#}"));
            std::process::exit(1);
        }
    }
}
