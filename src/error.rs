//! Error types for actkit operations.
//!
//! This module defines [`ActkitError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The shell executor and input validator return `ActkitError` to their caller
//! - The check-run reporter never returns an error; failures become outcome values
//! - Use `anyhow::Error` (via `ActkitError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for actkit operations.
#[derive(Debug, Error)]
pub enum ActkitError {
    /// Shell command exited with a non-zero code. The message is the code alone.
    #[error("{code}")]
    CommandFailed { code: i32 },

    /// Shell command was terminated before it could report an exit code.
    #[error("Command terminated by signal {signal:?}")]
    CommandKilled { signal: Option<i32> },

    /// An input value did not match its required pattern.
    #[error("Invalid value for input '{key}': '{value}'")]
    InvalidInput { key: String, value: String },

    /// A repository reference was not of the form `owner/name`.
    #[error("Invalid repository '{value}', expected 'owner/name'")]
    InvalidRepository { value: String },

    /// A textual value did not name a known variant.
    #[error("Invalid {kind} '{value}'")]
    InvalidEnum { kind: &'static str, value: String },

    /// A required runner environment variable is not set.
    #[error("Environment variable {name} is not set")]
    MissingEnvironment { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML input bundle failed to parse.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for actkit operations.
pub type Result<T> = std::result::Result<T, ActkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_message_is_exit_code() {
        let err = ActkitError::CommandFailed { code: 2 };
        assert_eq!(err.to_string(), "2");

        let err = ActkitError::CommandFailed { code: 127 };
        assert_eq!(err.to_string(), "127");
    }

    #[test]
    fn invalid_input_displays_key_and_value() {
        let err = ActkitError::InvalidInput {
            key: "foo".into(),
            value: "BAR".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("foo"));
        assert!(msg.contains("BAR"));
    }

    #[test]
    fn invalid_repository_displays_value() {
        let err = ActkitError::InvalidRepository {
            value: "no-slash".into(),
        };
        assert!(err.to_string().contains("no-slash"));
    }

    #[test]
    fn invalid_enum_displays_kind_and_value() {
        let err = ActkitError::InvalidEnum {
            kind: "status",
            value: "done".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("status"));
        assert!(msg.contains("done"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ActkitError = io_err.into();
        assert!(matches!(err, ActkitError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ActkitError::MissingEnvironment {
                name: "GITHUB_REPOSITORY".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
