//! Shell command execution and spawn profiles.

pub mod command;
pub mod platform;

pub use command::{execute, execute_with_sink, ExecOptions};
pub use platform::{is_elevated, SpawnProfile};
