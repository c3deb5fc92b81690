//! Command-line interface for actkit.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    BundleArgs, CheckArgs, CheckCommands, CheckCreateArgs, CheckUpdateArgs, Cli, Commands,
    ExecArgs, ResolveShaArgs, ValidateArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
