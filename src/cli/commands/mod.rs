//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Inputs and runner variables are
//! read once by the dispatcher and lent to each command.

pub mod check;
pub mod dispatcher;
pub mod exec;
pub mod probe;
pub mod resolve;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
