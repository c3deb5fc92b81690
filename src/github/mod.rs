//! GitHub integration: event context and check-run reporting.
//!
//! - [`context`] - Event context and head commit resolution
//! - [`payload`] - Check-run request types and payload construction
//! - [`client`] - Checks API seam and REST client
//! - [`reporter`] - Best-effort create/update of check runs

pub mod client;
pub mod context;
pub mod payload;
pub mod reporter;

pub use client::{CheckRun, ChecksApi, GitHubClient};
pub use context::{resolve_head_sha, EventContext, RepoRef, PULL_REQUEST_EVENTS};
pub use payload::{
    build_fields, Annotation, AnnotationLevel, BuiltFields, CheckAction, CheckConclusion,
    CheckImage, CheckRunFields, CheckRunInputs, CheckStatus, CreateCheckRun, OutputInput,
    OutputPayload,
};
pub use reporter::{CheckReporter, CreateOutcome, UpdateOutcome};
