//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// actkit - Shell execution and check-run reporting for CI workflows.
#[derive(Debug, Parser)]
#[command(name = "actkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a command line in the platform shell
    Exec(ExecArgs),

    /// Print the host distribution identifier from /etc/os-release
    OsId,

    /// Print the commit SHA a check run should attach to
    ResolveSha(ResolveShaArgs),

    /// Validate a step input against a regular expression
    Validate(ValidateArgs),

    /// Create or update check runs
    Check(CheckArgs),
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecArgs {
    /// Do not echo the command's stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Prefix the command with sudo according to the `sudo` input
    #[arg(long)]
    pub sudo: bool,

    /// Write the captured stdout to this step output
    #[arg(long, value_name = "NAME")]
    pub output_name: Option<String>,

    /// Command line to run; words are joined with spaces
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl ExecArgs {
    /// The command line handed to the shell.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Arguments for the `resolve-sha` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveShaArgs {
    /// Explicit SHA that overrides the event context
    #[arg(long)]
    pub sha: Option<String>,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Input name, e.g. `version`
    #[arg(long)]
    pub key: String,

    /// Regular expression the value must match
    #[arg(long)]
    pub pattern: String,
}

/// Arguments for the `check` command group.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Repository as owner/name (defaults to GITHUB_REPOSITORY)
    #[arg(long, global = true)]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub action: CheckCommands,
}

/// Check-run operations.
#[derive(Debug, Clone, Subcommand)]
pub enum CheckCommands {
    /// Create a check run and print its id
    Create(CheckCreateArgs),

    /// Update an existing check run
    Update(CheckUpdateArgs),
}

/// Arguments for `check create`.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckCreateArgs {
    /// Check run name
    #[arg(long)]
    pub name: String,

    /// Commit to attach to (defaults to the event's head commit)
    #[arg(long)]
    pub sha: Option<String>,

    #[command(flatten)]
    pub bundle: BundleArgs,
}

/// Arguments for `check update`.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckUpdateArgs {
    /// Id of the check run to update
    #[arg(long)]
    pub id: u64,

    #[command(flatten)]
    pub bundle: BundleArgs,
}

/// Check-run inputs, from a file and/or flags. Flags win.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BundleArgs {
    /// YAML or JSON file with check-run inputs
    #[arg(long, value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// queued, in_progress or completed
    #[arg(long)]
    pub status: Option<String>,

    /// Conclusion, e.g. success or action_required
    #[arg(long)]
    pub conclusion: Option<String>,

    /// Output title (defaults to the check run name)
    #[arg(long)]
    pub title: Option<String>,

    /// Output summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Output text
    #[arg(long)]
    pub text: Option<String>,

    /// Link to details about the run
    #[arg(long)]
    pub details_url: Option<String>,

    /// Link used when action is required
    #[arg(long)]
    pub action_url: Option<String>,
}
