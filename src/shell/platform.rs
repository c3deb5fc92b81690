//! Platform-specific spawn profiles.
//!
//! A [`SpawnProfile`] owns the fixed program, flags and environment used to
//! hand a command line to a shell. The profile is picked once per process by
//! [`SpawnProfile::current`]; call sites never branch on the platform.

use std::process::Command;

/// Location of the MSYS2 bash shipped on hosted Windows runners.
pub const MSYS2_BASH: &str = r"C:\msys64\usr\bin\bash.exe";

/// Default POSIX shell used on every non-Windows host.
pub const POSIX_SHELL: &str = "/bin/sh";

/// Environment variable that carries the GitHub token to Homebrew.
pub const HOMEBREW_TOKEN_VAR: &str = "HOMEBREW_GITHUB_API_TOKEN";

/// How a command line is handed to a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnProfile {
    /// `/bin/sh -c <command>`.
    Posix,
    /// MSYS2 login bash (`bash.exe -lc <command>`) in the MINGW64 environment.
    Msys2,
}

impl SpawnProfile {
    /// The profile for the host this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            SpawnProfile::Msys2
        } else {
            SpawnProfile::Posix
        }
    }

    /// Shell executable.
    pub fn program(&self) -> &'static str {
        match self {
            SpawnProfile::Posix => POSIX_SHELL,
            SpawnProfile::Msys2 => MSYS2_BASH,
        }
    }

    /// Flag that makes the shell read the command from its next argument.
    ///
    /// MSYS2 bash runs as a login shell so `/etc/profile` sets up the
    /// MINGW64 toolchain paths.
    pub fn flag(&self) -> &'static str {
        match self {
            SpawnProfile::Posix => "-c",
            SpawnProfile::Msys2 => "-lc",
        }
    }

    /// Variables layered over the inherited environment.
    ///
    /// The Homebrew token is only forwarded on POSIX hosts and only when a
    /// non-empty token is available.
    pub fn env(&self, github_token: Option<&str>) -> Vec<(&'static str, String)> {
        match self {
            SpawnProfile::Posix => github_token
                .filter(|t| !t.is_empty())
                .map(|t| vec![(HOMEBREW_TOKEN_VAR, t.to_string())])
                .unwrap_or_default(),
            SpawnProfile::Msys2 => vec![
                // keep the runner's PATH instead of the minimal MSYS2 one
                ("MSYS2_PATH_TYPE", "inherit".to_string()),
                // stay in the current directory instead of cd'ing to $HOME
                ("CHERE_INVOKING", "1".to_string()),
                ("MSYSTEM", "MINGW64".to_string()),
            ],
        }
    }

    /// Build the process for `command` without spawning it.
    pub fn command(&self, command: &str, github_token: Option<&str>) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.arg(self.flag());
        cmd.arg(command);
        for (key, value) in self.env(github_token) {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}
