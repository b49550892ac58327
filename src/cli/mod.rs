//! Command-line interface for commitguard
//!
//! Main CLI structure and command dispatch. Uses clap for argument parsing;
//! all human-facing output goes through the [`Output`] handler.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// Commitguard - configurable git hook pipeline
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
    /// Install git hooks and wire up manifest scripts
    Install,
    /// Remove git hooks installed by commitguard
    Uninstall,
    /// Run a hook pipeline (pre-commit, pre-push)
    Run {
        /// Hook name to run
        hook: String,
    },
    /// Run a single check outside the pipeline
    #[command(subcommand)]
    Check(CheckCommands),
    /// Show repository and hook status
    Status,
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Individual check subcommands
#[derive(Subcommand)]
pub enum CheckCommands {
    /// Audit .gitignore for missing patterns
    Gitignore,
    /// Scan staged files for non-lowercase names and imports
    Lowercase,
    /// Build projects affected by the staged files
    Build,
    /// Print commit recency and divergence reminders
    Reminder,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        let config_path = self.config.as_deref().map(std::path::Path::new);

        match self.command {
            Some(Commands::Init { force }) => commands::init::execute(force, &output).await,
            Some(Commands::Install) => commands::install::execute(&output).await,
            Some(Commands::Uninstall) => commands::uninstall::execute(&output).await,
            Some(Commands::Run { hook }) => {
                commands::run::execute(&hook, config_path, &output).await
            }
            Some(Commands::Check(cmd)) => commands::check::execute(cmd, config_path, &output).await,
            Some(Commands::Status) => commands::status::execute(&output).await,
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, config_path, &output).await
            }
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
