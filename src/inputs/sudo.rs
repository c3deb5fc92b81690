//! The `sudo` input.

use std::fmt;
use std::str::FromStr;

use crate::error::ActkitError;

/// Whether commands that need root are prefixed with `sudo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SudoMode {
    /// Use sudo on Linux when not already running as root.
    #[default]
    Auto,
    /// Always prefix with sudo.
    Always,
    /// Never prefix with sudo.
    Never,
}

impl SudoMode {
    /// Decide for the current host.
    pub fn enabled(&self) -> bool {
        self.enabled_for(cfg!(target_os = "linux"), crate::shell::is_elevated())
    }

    /// Decide for an explicit host description.
    pub fn enabled_for(&self, linux: bool, elevated: bool) -> bool {
        match self {
            SudoMode::Auto => linux && !elevated,
            SudoMode::Always => true,
            SudoMode::Never => false,
        }
    }

    /// Prefix `command` with `sudo` when enabled for this host.
    pub fn apply(&self, command: &str) -> String {
        if self.enabled() {
            format!("sudo {}", command)
        } else {
            command.to_string()
        }
    }
}

impl FromStr for SudoMode {
    type Err = ActkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(SudoMode::Auto),
            "true" => Ok(SudoMode::Always),
            "false" => Ok(SudoMode::Never),
            other => Err(ActkitError::InvalidEnum {
                kind: "sudo mode",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SudoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SudoMode::Auto => write!(f, "auto"),
            SudoMode::Always => write!(f, "true"),
            SudoMode::Never => write!(f, "false"),
        }
    }
}
