//! Runner environment configuration.
//!
//! The hosting CI runner describes the job through `GITHUB_*` variables.
//! [`RunnerEnv`] gathers them once so the rest of the crate receives plain
//! values instead of reading process state.

use std::path::PathBuf;

/// Default REST endpoint when `GITHUB_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Variables provided by the runner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunnerEnv {
    /// REST API base URL.
    pub api_url: String,
    /// `owner/name` of the repository running the workflow.
    pub repository: Option<String>,
    /// Name of the triggering event.
    pub event_name: Option<String>,
    /// Path to the JSON file holding the event payload.
    pub event_path: Option<PathBuf>,
    /// Commit SHA the runner checked out.
    pub sha: Option<String>,
    /// File that receives step outputs.
    pub output_path: Option<PathBuf>,
    /// Token from `GITHUB_TOKEN`, used when no `github-token` input is given.
    pub token: Option<String>,
}

impl RunnerEnv {
    /// Read the runner variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key))
    }

    /// Read the runner variables with a custom env var lookup (for testing).
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let get = |key: &str| env_fn(key).ok().filter(|v| !v.is_empty());

        Self {
            api_url: get("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            repository: get("GITHUB_REPOSITORY"),
            event_name: get("GITHUB_EVENT_NAME"),
            event_path: get("GITHUB_EVENT_PATH").map(PathBuf::from),
            sha: get("GITHUB_SHA"),
            output_path: get("GITHUB_OUTPUT").map(PathBuf::from),
            token: get("GITHUB_TOKEN"),
        }
    }
}
