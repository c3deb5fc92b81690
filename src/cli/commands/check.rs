//! Check command implementations.
//!
//! `actkit check create` and `actkit check update` report to the Checks API.
//! Reporting failures are logged and never change the exit code; a failed
//! create prints an empty id.

use std::io::Write;

use anyhow::anyhow;
use serde_yaml::{Mapping, Value};

use crate::cli::args::{BundleArgs, CheckCreateArgs, CheckUpdateArgs};
use crate::config::RunnerEnv;
use crate::error::{ActkitError, Result};
use crate::github::{
    resolve_head_sha, CheckReporter, CheckRunInputs, CreateOutcome, EventContext, GitHubClient,
    RepoRef,
};
use crate::inputs::Inputs;
use crate::outputs::set_output;

use super::dispatcher::{Command, CommandResult};

/// Output name that receives the created check run id.
pub const CHECK_RUN_ID_OUTPUT: &str = "check-run-id";

/// Repository, credentials and runner state shared by check commands.
pub struct CheckTarget<'a> {
    inputs: &'a Inputs,
    runner: &'a RunnerEnv,
    repo: Option<String>,
}

impl<'a> CheckTarget<'a> {
    pub fn new(inputs: &'a Inputs, runner: &'a RunnerEnv, repo: Option<String>) -> Self {
        Self {
            inputs,
            runner,
            repo,
        }
    }

    /// `--repo`, falling back to `GITHUB_REPOSITORY`.
    pub fn repo(&self) -> Result<RepoRef> {
        self.repo
            .as_deref()
            .or(self.runner.repository.as_deref())
            .ok_or_else(|| ActkitError::MissingEnvironment {
                name: "GITHUB_REPOSITORY".to_string(),
            })?
            .parse()
    }

    /// The `github-token` input, falling back to `GITHUB_TOKEN`.
    pub fn token(&self) -> Option<String> {
        self.inputs
            .github_token()
            .map(String::from)
            .or_else(|| self.runner.token.clone())
    }

    fn reporter(&self) -> std::result::Result<CheckReporter<GitHubClient>, String> {
        GitHubClient::new(&self.runner.api_url, self.token())
            .map(CheckReporter::new)
            .map_err(|e| format!("{:#}", e))
    }
}

/// Merge the inputs file with flag overrides into [`CheckRunInputs`].
pub fn load_inputs(bundle: &BundleArgs) -> Result<CheckRunInputs> {
    let mut doc = match &bundle.inputs {
        Some(path) => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
        None => Value::Mapping(Mapping::new()),
    };
    if doc.is_null() {
        doc = Value::Mapping(Mapping::new());
    }
    let Value::Mapping(map) = &mut doc else {
        return Err(anyhow!("Check-run inputs must be a mapping").into());
    };

    let overrides = [
        ("status", &bundle.status, None),
        ("conclusion", &bundle.conclusion, None),
        ("details_url", &bundle.details_url, Some("detailsURL")),
        ("action_url", &bundle.action_url, Some("actionURL")),
    ];
    for (key, value, alias) in overrides {
        if let Some(value) = value {
            if let Some(alias) = alias {
                map.remove(alias);
            }
            map.insert(key.into(), value.as_str().into());
        }
    }

    let output_overrides = [
        ("title", &bundle.title),
        ("summary", &bundle.summary),
        ("text_description", &bundle.text),
    ];
    if output_overrides.iter().any(|(_, v)| v.is_some()) {
        let output = map
            .entry("output".into())
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if output.is_null() {
            *output = Value::Mapping(Mapping::new());
        }
        let Value::Mapping(output) = output else {
            return Err(anyhow!("Check-run 'output' must be a mapping").into());
        };
        for (key, value) in output_overrides {
            if let Some(value) = value {
                output.insert(key.into(), value.as_str().into());
            }
        }
    }

    Ok(serde_yaml::from_value(doc)?)
}

/// The `check create` command.
pub struct CheckCreateCommand<'a> {
    target: CheckTarget<'a>,
    args: CheckCreateArgs,
}

impl<'a> CheckCreateCommand<'a> {
    pub fn new(target: CheckTarget<'a>, args: CheckCreateArgs) -> Self {
        Self { target, args }
    }

    fn head_sha(&self) -> Result<String> {
        let ctx = EventContext::from_runner(self.target.runner)?;
        Ok(resolve_head_sha(&ctx, self.args.sha.as_deref()))
    }
}

impl Command for CheckCreateCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let inputs = load_inputs(&self.args.bundle)?;
        let repo = self.target.repo()?;
        let head_sha = self.head_sha()?;

        let outcome = match self.target.reporter() {
            Ok(reporter) => reporter.create(&self.args.name, &head_sha, &repo, &inputs),
            Err(error) => {
                tracing::error!("Failed to create check run '{}': {}", self.args.name, error);
                CreateOutcome::Failed { error }
            }
        };

        let id = outcome.id();
        writeln!(out, "{}", id)?;
        if let Some(path) = &self.target.runner.output_path {
            set_output(path, CHECK_RUN_ID_OUTPUT, &id)?;
        }
        Ok(CommandResult::success())
    }
}

/// The `check update` command.
pub struct CheckUpdateCommand<'a> {
    target: CheckTarget<'a>,
    args: CheckUpdateArgs,
}

impl<'a> CheckUpdateCommand<'a> {
    pub fn new(target: CheckTarget<'a>, args: CheckUpdateArgs) -> Self {
        Self { target, args }
    }
}

impl Command for CheckUpdateCommand<'_> {
    fn execute(&self, _out: &mut dyn Write) -> Result<CommandResult> {
        let inputs = load_inputs(&self.args.bundle)?;
        let repo = self.target.repo()?;

        match self.target.reporter() {
            Ok(reporter) => {
                reporter.update(self.args.id, &repo, &inputs);
            }
            Err(error) => {
                tracing::error!("Failed to update check run {}: {}", self.args.id, error);
            }
        }
        Ok(CommandResult::success())
    }
}
