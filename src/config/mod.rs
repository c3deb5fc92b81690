//! Configuration sourced from the CI runner.
//!
//! Step inputs live in [`crate::inputs`]; this module covers the runner's own
//! `GITHUB_*` variables.

pub mod runner;

pub use runner::{RunnerEnv, DEFAULT_API_URL};
