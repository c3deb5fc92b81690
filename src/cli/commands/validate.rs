//! The `actkit validate` command.

use std::io::Write;

use anyhow::Context;
use regex::Regex;

use crate::cli::args::ValidateArgs;
use crate::error::Result;
use crate::inputs::{validate_input, Inputs};

use super::dispatcher::{Command, CommandResult};

/// Validates one input and prints its value when set.
pub struct ValidateCommand<'a> {
    inputs: &'a Inputs,
    args: ValidateArgs,
}

impl<'a> ValidateCommand<'a> {
    pub fn new(inputs: &'a Inputs, args: ValidateArgs) -> Self {
        Self { inputs, args }
    }
}

impl Command for ValidateCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let pattern = Regex::new(&self.args.pattern)
            .with_context(|| format!("Invalid pattern '{}'", self.args.pattern))?;

        if let Some(value) = validate_input(self.inputs, &self.args.key, &pattern)? {
            writeln!(out, "{}", value)?;
        }
        Ok(CommandResult::success())
    }
}
