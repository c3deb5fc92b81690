//! actkit - Shell execution and check-run reporting for CI workflows.
//!
//! actkit runs command lines in the shell a CI host expects and reports
//! progress to the GitHub Checks API without letting reporting failures
//! break the job.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runner environment (`GITHUB_*` variables)
//! - [`environment`] - Best-effort host probing
//! - [`error`] - Error types and result aliases
//! - [`github`] - Event context, commit resolution and check-run reporting
//! - [`inputs`] - Step inputs and their validation
//! - [`outputs`] - Step outputs
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use actkit::github::{resolve_head_sha, EventContext};
//! use serde_json::json;
//!
//! let ctx = EventContext::new(
//!     "pull_request",
//!     json!({"pull_request": {"head": {"sha": "abc"}}}),
//!     "merge-sha",
//! );
//! assert_eq!(resolve_head_sha(&ctx, None), "abc");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod github;
pub mod inputs;
pub mod outputs;
pub mod shell;

pub use error::{ActkitError, Result};
