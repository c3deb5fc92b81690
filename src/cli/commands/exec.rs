//! Exec command implementation.
//!
//! The `actkit exec` command runs a command line through the platform shell.

use std::io::Write;

use crate::cli::args::ExecArgs;
use crate::config::RunnerEnv;
use crate::error::{ActkitError, Result};
use crate::inputs::Inputs;
use crate::outputs::set_output;
use crate::shell::{self, ExecOptions};

use super::dispatcher::{Command, CommandResult};

/// The exec command implementation.
pub struct ExecCommand<'a> {
    inputs: &'a Inputs,
    runner: &'a RunnerEnv,
    args: ExecArgs,
}

impl<'a> ExecCommand<'a> {
    /// Create a new exec command.
    pub fn new(inputs: &'a Inputs, runner: &'a RunnerEnv, args: ExecArgs) -> Self {
        Self {
            inputs,
            runner,
            args,
        }
    }

    /// The command line after applying the `sudo` input.
    pub fn command_line(&self) -> Result<String> {
        let line = self.args.command_line();
        if self.args.sudo {
            Ok(self.inputs.sudo()?.apply(&line))
        } else {
            Ok(line)
        }
    }

    fn options(&self) -> ExecOptions {
        ExecOptions {
            quiet: self.args.quiet,
            github_token: self
                .inputs
                .github_token()
                .map(String::from)
                .or_else(|| self.runner.token.clone()),
        }
    }
}

impl Command for ExecCommand<'_> {
    fn execute(&self, _out: &mut dyn Write) -> Result<CommandResult> {
        let line = self.command_line()?;

        match shell::execute(&line, &self.options()) {
            Ok(stdout) => {
                if let (Some(name), Some(path)) = (&self.args.output_name, &self.runner.output_path)
                {
                    set_output(path, name, &stdout)?;
                }
                Ok(CommandResult::success())
            }
            Err(ActkitError::CommandFailed { code }) => {
                tracing::error!("`{}` exited with code {}", line, code);
                Ok(CommandResult::failure(code))
            }
            Err(e) => Err(e),
        }
    }
}
