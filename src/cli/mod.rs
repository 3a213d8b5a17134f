//! Command-line interface for commitgate
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing and mirrors the way git invokes
//! the installed hooks: `commitgate run <hook> [args...]`.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;

pub use output::Output;

/// Commitgate - Pre-commit validation pipeline
#[derive(Parser)]
#[command(author, version, long_about = None)]
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
    /// Install commitgate hooks into .git/hooks
    Install {
        /// Overwrite hooks not owned by commitgate
        #[arg(short, long)]
        force: bool,
    },
    /// Remove commitgate hooks from .git/hooks
    Uninstall,
    /// Run a hook (invoked by the installed hook scripts)
    Run {
        /// Hook name (pre-commit, commit-msg)
        hook: String,
        /// Arguments git passed to the hook
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Run the staged-file checks directly
    Check {
        /// Explicit files to check instead of the staged list
        files: Vec<String>,
    },
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show hook and configuration status
    Status,
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a commented default commitgate.toml
    Init,
    /// Validate configuration
    Validate,
    /// Show effective configuration
    Show {
        /// Output format (toml, json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Install { force }) => commands::install::execute(force, &output).await,
            Some(Commands::Uninstall) => commands::uninstall::execute(&output).await,
            Some(Commands::Run { hook, args }) => {
                commands::run::execute(&hook, args, config_path, &output).await
            }
            Some(Commands::Check { files }) => {
                commands::run::execute("pre-commit", files, config_path, &output).await
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, config_path, &output).await
            }
            Some(Commands::Status) => commands::status::execute(config_path, &output).await,
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
