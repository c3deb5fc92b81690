//! Event context and head commit resolution.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::config::RunnerEnv;
use crate::error::{ActkitError, Result};

/// Events whose default SHA is the merge ref rather than the PR head.
pub const PULL_REQUEST_EVENTS: &[&str] = &[
    "pull_request",
    "pull_request_review",
    "pull_request_review_comment",
    "pull_request_target",
];

/// Repository that check runs are scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = ActkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(RepoRef::new(owner, repo))
            }
            _ => Err(ActkitError::InvalidRepository {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The event that triggered the workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventContext {
    /// Event name, e.g. `push` or `pull_request`.
    pub event_name: String,
    /// Raw webhook payload.
    pub payload: Value,
    /// SHA the runner reports for this event.
    pub sha: String,
}

impl EventContext {
    pub fn new(event_name: impl Into<String>, payload: Value, sha: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            payload,
            sha: sha.into(),
        }
    }

    /// Build the context from runner variables, loading the payload file.
    ///
    /// An unset `GITHUB_EVENT_PATH`, or one naming a file that does not
    /// exist, leaves the payload as `null`. Other read errors and malformed
    /// JSON are errors.
    pub fn from_runner(env: &RunnerEnv) -> Result<Self> {
        let payload = match &env.event_path {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(content) => serde_json::from_str(&content)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!("Event payload {} does not exist", path.display());
                    Value::Null
                }
                Err(e) => return Err(e.into()),
            },
            None => Value::Null,
        };

        Ok(Self {
            event_name: env.event_name.clone().unwrap_or_default(),
            payload,
            sha: env.sha.clone().unwrap_or_default(),
        })
    }

    /// Whether the event is one of [`PULL_REQUEST_EVENTS`].
    pub fn is_pull_request(&self) -> bool {
        PULL_REQUEST_EVENTS.contains(&self.event_name.as_str())
    }

    /// `pull_request.head.sha` from the payload, if present.
    pub fn pull_request_head_sha(&self) -> Option<&str> {
        self.payload
            .pointer("/pull_request/head/sha")
            .and_then(Value::as_str)
    }
}

/// Commit that a check run should attach to.
///
/// Precedence: a non-empty `override_sha`, then the PR head SHA for pull
/// request events, then the event's default SHA.
pub fn resolve_head_sha(ctx: &EventContext, override_sha: Option<&str>) -> String {
    if let Some(sha) = override_sha.filter(|s| !s.is_empty()) {
        return sha.to_string();
    }

    if ctx.is_pull_request() {
        if let Some(head) = ctx.pull_request_head_sha() {
            return head.to_string();
        }
    }

    ctx.sha.clone()
}
