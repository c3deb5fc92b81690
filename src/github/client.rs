//! Checks API client.
//!
//! [`ChecksApi`] is the seam the reporter talks to; [`GitHubClient`] is the
//! REST implementation over a blocking `reqwest` client.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::context::RepoRef;
use super::payload::{CheckRunFields, CreateCheckRun};

/// Media type for the v3 REST API.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned in every request.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Check run as returned by the API. Only the fields actkit reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckRun {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub head_sha: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Remote operations on check runs.
pub trait ChecksApi {
    /// Create a check run and return it.
    fn create_check_run(&self, repo: &RepoRef, body: &CreateCheckRun) -> Result<CheckRun>;

    /// Fetch an existing check run.
    fn get_check_run(&self, repo: &RepoRef, id: u64) -> Result<CheckRun>;

    /// Update an existing check run.
    fn update_check_run(&self, repo: &RepoRef, id: u64, fields: &CheckRunFields) -> Result<()>;
}

/// GitHub REST client for the Checks API.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl GitHubClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        Self::with_timeout(base_url, token, Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("actkit/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn check_runs_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}/check-runs",
            self.base_url, repo.owner, repo.repo
        )
    }

    fn check_run_url(&self, repo: &RepoRef, id: u64) -> String {
        format!("{}/{}", self.check_runs_url(repo), id)
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = self
            .prepare(request)
            .send()
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("HTTP {} from {}: {}", status, url, body.trim());
        }

        Ok(response)
    }
}

impl ChecksApi for GitHubClient {
    fn create_check_run(&self, repo: &RepoRef, body: &CreateCheckRun) -> Result<CheckRun> {
        let url = self.check_runs_url(repo);
        let response = self.send(self.client.post(&url).json(body), &url)?;
        response
            .json()
            .with_context(|| format!("Failed to parse check run from {}", url))
    }

    fn get_check_run(&self, repo: &RepoRef, id: u64) -> Result<CheckRun> {
        let url = self.check_run_url(repo, id);
        let response = self.send(self.client.get(&url), &url)?;
        response
            .json()
            .with_context(|| format!("Failed to parse check run from {}", url))
    }

    fn update_check_run(&self, repo: &RepoRef, id: u64, fields: &CheckRunFields) -> Result<()> {
        let url = self.check_run_url(repo, id);
        self.send(self.client.patch(&url).json(fields), &url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::payload::{build_fields, CheckRunInputs, CheckStatus};
    use chrono::Utc;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo() -> RepoRef {
        RepoRef::new("octo", "widgets")
    }

    #[test]
    fn default_timeout_is_30_seconds() {
        let client = GitHubClient::new("https://api.github.com", None).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", None).unwrap();
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
        assert_eq!(
            client.check_run_url(&repo(), 7),
            "https://ghe.example.com/api/v3/repos/octo/widgets/check-runs/7"
        );
    }

    #[test]
    fn create_sends_auth_and_version_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/repos/octo/widgets/check-runs")
                .header("authorization", "Bearer tok")
                .header("x-github-api-version", "2022-11-28")
                .header("accept", "application/vnd.github+json");
            then.status(201)
                .json_body(json!({"id": 42, "name": "build", "status": "queued"}));
        });

        let client = GitHubClient::new(&server.base_url(), Some("tok".into())).unwrap();
        let now = Utc::now();
        let body = CreateCheckRun {
            name: "build".into(),
            head_sha: "abc".into(),
            started_at: now,
            fields: build_fields("build", &CheckRunInputs::with_status(CheckStatus::Queued), now)
                .fields,
        };

        let run = client.create_check_run(&repo(), &body).unwrap();
        mock.assert();
        assert_eq!(run.id, 42);
        assert_eq!(run.name, "build");
    }

    #[test]
    fn get_parses_check_run() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/octo/widgets/check-runs/7");
            then.status(200)
                .json_body(json!({"id": 7, "name": "lint", "head_sha": "abc"}));
        });

        let client = GitHubClient::new(&server.base_url(), None).unwrap();
        let run = client.get_check_run(&repo(), 7).unwrap();
        assert_eq!(run.name, "lint");
        assert_eq!(run.head_sha.as_deref(), Some("abc"));
    }

    #[test]
    fn update_uses_patch() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH).path("/repos/octo/widgets/check-runs/7");
            then.status(200).json_body(json!({"id": 7, "name": "lint"}));
        });

        let client = GitHubClient::new(&server.base_url(), None).unwrap();
        let fields = build_fields(
            "lint",
            &CheckRunInputs::with_status(CheckStatus::InProgress),
            Utc::now(),
        )
        .fields;
        client.update_check_run(&repo(), 7, &fields).unwrap();
        mock.assert();
    }

    #[test]
    fn error_status_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/octo/widgets/check-runs/9");
            then.status(404).body(r#"{"message":"Not Found"}"#);
        });

        let client = GitHubClient::new(&server.base_url(), None).unwrap();
        let err = client.get_check_run(&repo(), 9).unwrap_err().to_string();
        assert!(err.contains("404"), "Error should mention 404: {}", err);
    }
}
