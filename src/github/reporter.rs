//! Best-effort check-run reporting.
//!
//! Reporting must never abort the job it describes. Both operations return
//! an outcome value instead of an error; failures are logged and surface as
//! the `Failed` variant.

use chrono::Utc;

use super::client::ChecksApi;
use super::context::RepoRef;
use super::payload::{build_fields, BuiltFields, CheckRunInputs, CreateCheckRun};

/// Result of [`CheckReporter::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The check run exists with this id.
    Created { id: u64 },
    /// No check run was created.
    Failed { error: String },
}

impl CreateOutcome {
    /// The id as text, or `""` when nothing was created.
    pub fn id(&self) -> String {
        match self {
            CreateOutcome::Created { id } => id.to_string(),
            CreateOutcome::Failed { .. } => String::new(),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created { .. })
    }
}

/// Result of [`CheckReporter::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Failed { error: String },
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}

/// Creates and updates check runs through a [`ChecksApi`].
pub struct CheckReporter<A> {
    api: A,
}

impl<A: ChecksApi> CheckReporter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Create a check run named `name` on `head_sha`.
    pub fn create(
        &self,
        name: &str,
        head_sha: &str,
        repo: &RepoRef,
        inputs: &CheckRunInputs,
    ) -> CreateOutcome {
        let now = Utc::now();
        let BuiltFields { fields, notice } = build_fields(name, inputs, now);
        log_notice(notice);

        let body = CreateCheckRun {
            name: name.to_string(),
            head_sha: head_sha.to_string(),
            started_at: now,
            fields,
        };

        match self.api.create_check_run(repo, &body) {
            Ok(run) => {
                tracing::info!("Created check run '{}' ({}) on {}", name, run.id, head_sha);
                CreateOutcome::Created { id: run.id }
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::error!("Failed to create check run '{}' in {}: {}", name, repo, error);
                CreateOutcome::Failed { error }
            }
        }
    }

    /// Update check run `id`, keeping its stored name as the title fallback.
    pub fn update(&self, id: u64, repo: &RepoRef, inputs: &CheckRunInputs) -> UpdateOutcome {
        let existing = match self.api.get_check_run(repo, id) {
            Ok(run) => run,
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::error!("Failed to fetch check run {} in {}: {}", id, repo, error);
                return UpdateOutcome::Failed { error };
            }
        };

        let BuiltFields { fields, notice } = build_fields(&existing.name, inputs, Utc::now());
        log_notice(notice);

        match self.api.update_check_run(repo, id, &fields) {
            Ok(()) => {
                tracing::info!("Updated check run '{}' ({}) to {}", existing.name, id, fields.status);
                UpdateOutcome::Updated
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::error!("Failed to update check run {} in {}: {}", id, repo, error);
                UpdateOutcome::Failed { error }
            }
        }
    }
}

fn log_notice(notice: Option<String>) {
    if let Some(notice) = notice {
        tracing::info!("{}", notice);
    }
}
