//! Resolve-sha command implementation.
//!
//! The `actkit resolve-sha` command prints the commit a check run would
//! attach to for the current event.

use std::io::Write;

use crate::cli::args::ResolveShaArgs;
use crate::config::RunnerEnv;
use crate::error::Result;
use crate::github::{resolve_head_sha, EventContext};

use super::dispatcher::{Command, CommandResult};

/// The resolve-sha command implementation.
pub struct ResolveShaCommand<'a> {
    runner: &'a RunnerEnv,
    args: ResolveShaArgs,
}

impl<'a> ResolveShaCommand<'a> {
    /// Create a new resolve-sha command.
    pub fn new(runner: &'a RunnerEnv, args: ResolveShaArgs) -> Self {
        Self { runner, args }
    }
}

impl Command for ResolveShaCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let ctx = EventContext::from_runner(self.runner)?;
        let sha = resolve_head_sha(&ctx, self.args.sha.as_deref());
        writeln!(out, "{}", sha)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn prints_pull_request_head() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        std::fs::write(&path, r#"{"pull_request":{"head":{"sha":"abc"}}}"#).unwrap();
        let runner = RunnerEnv {
            event_name: Some("pull_request".into()),
            event_path: Some(path),
            sha: Some("merge".into()),
            ..Default::default()
        };

        let mut out = Vec::new();
        ResolveShaCommand::new(&runner, ResolveShaArgs::default())
            .execute(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abc\n");
    }

    #[test]
    fn override_is_printed() {
        let runner = RunnerEnv {
            sha: Some("def".into()),
            ..Default::default()
        };
        let args = ResolveShaArgs {
            sha: Some("xyz".into()),
        };

        let mut out = Vec::new();
        ResolveShaCommand::new(&runner, args).execute(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "xyz\n");
    }
}
