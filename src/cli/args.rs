// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// headerlint - commit header linter
///
/// Checks commit headers against a configured pattern and type list.
#[derive(Parser, Debug)]
#[command(name = "headerlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Lint commit headers against an allowed type list", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to checking HEAD)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable all interactive prompts
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HEADERLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint commit messages (default command)
    Check(CheckArgs),

    /// Show the allowed commit types
    Types,

    /// Manage the commit-msg git hook
    Hooks(HooksArgs),

    /// Write a headerlint.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Read the message from a file (as passed to a commit-msg hook)
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["message", "stdin"])]
    pub edit: Option<PathBuf>,

    /// Lint the given message text
    #[arg(short, long, conflicts_with = "stdin")]
    pub message: Option<String>,

    /// Read the message from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Treat TARGET as a range even without `..`
    #[arg(long)]
    pub range: bool,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Replace an existing hook (it is kept as a backup)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long, value_enum)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Only `chore` commits
    Minimal,
    /// Conventional commit types (default)
    Conventional,
    /// One commit type per project, hyphenated names allowed
    Workspace,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            edit: None,
            message: None,
            stdin: false,
            range: false,
            strict: false,
        }
    }
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}
