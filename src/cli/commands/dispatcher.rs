//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{CheckCommands, Cli, Commands};
use crate::config::RunnerEnv;
use crate::error::Result;
use crate::inputs::Inputs;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its printable result to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit status byte for the process.
    ///
    /// Codes outside `0..=255` (negative NTSTATUS values on Windows, for
    /// example) map to 1. A failure never exits with 0.
    pub fn process_exit_code(&self) -> u8 {
        match u8::try_from(self.exit_code) {
            Ok(0) if !self.success => 1,
            Ok(code) => code,
            Err(_) => 1,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    inputs: Inputs,
    runner: RunnerEnv,
}

impl CommandDispatcher {
    /// Create a dispatcher over explicit inputs and runner variables.
    pub fn new(inputs: Inputs, runner: RunnerEnv) -> Self {
        Self { inputs, runner }
    }

    /// Create a dispatcher from the process environment.
    pub fn from_env() -> Self {
        Self::new(Inputs::from_env(), RunnerEnv::from_env())
    }

    /// Step inputs seen by commands.
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Runner variables seen by commands.
    pub fn runner(&self) -> &RunnerEnv {
        &self.runner
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Exec(args) => {
                let cmd = super::exec::ExecCommand::new(&self.inputs, &self.runner, args.clone());
                cmd.execute(out)
            }
            Commands::OsId => super::probe::OsIdCommand.execute(out),
            Commands::ResolveSha(args) => {
                let cmd = super::resolve::ResolveShaCommand::new(&self.runner, args.clone());
                cmd.execute(out)
            }
            Commands::Validate(args) => {
                let cmd = super::validate::ValidateCommand::new(&self.inputs, args.clone());
                cmd.execute(out)
            }
            Commands::Check(check) => {
                let target = super::check::CheckTarget::new(
                    &self.inputs,
                    &self.runner,
                    check.repo.clone(),
                );
                match &check.action {
                    CheckCommands::Create(args) => {
                        super::check::CheckCreateCommand::new(target, args.clone()).execute(out)
                    }
                    CheckCommands::Update(args) => {
                        super::check::CheckUpdateCommand::new(target, args.clone()).execute(out)
                    }
                }
            }
        }
    }
}
