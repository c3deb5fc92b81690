//! The `actkit os-id` command.

use std::io::Write;

use crate::environment::os_release_id;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Prints the distribution identifier, or `(unknown)`.
pub struct OsIdCommand;

impl Command for OsIdCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "{}", os_release_id())?;
        Ok(CommandResult::success())
    }
}
