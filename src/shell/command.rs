//! Shell command execution.

use crate::error::{ActkitError, Result};
use std::io::{ErrorKind, Read, Write};
use std::process::{ExitStatus, Stdio};

use super::platform::SpawnProfile;

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Do not mirror stdout while the command runs. Output is still captured.
    pub quiet: bool,

    /// Token forwarded to the child for package managers that call GitHub.
    pub github_token: Option<String>,
}

impl ExecOptions {
    /// Options that suppress the stdout echo.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Default::default()
        }
    }
}

/// Execute a command line through the host's spawn profile.
///
/// Stdout chunks are mirrored to this process's stdout unless
/// [`ExecOptions::quiet`] is set. Stderr is inherited. Returns the captured
/// stdout trimmed of surrounding whitespace.
pub fn execute(command: &str, options: &ExecOptions) -> Result<String> {
    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    execute_with_sink(command, options, SpawnProfile::current(), &mut sink)
}

/// Execute a command line, mirroring stdout into `sink`.
pub fn execute_with_sink<W: Write>(
    command: &str,
    options: &ExecOptions,
    profile: SpawnProfile,
    sink: &mut W,
) -> Result<String> {
    let mut cmd = profile.command(command, options.github_token.as_deref());
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::inherit());

    tracing::debug!("Running `{}` via {}", command, profile.program());

    let mut child = cmd.spawn()?;

    let mut captured = Vec::new();
    if let Some(mut stdout) = child.stdout.take() {
        if let Err(e) = pump(&mut stdout, options.quiet, sink, &mut captured) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }
    }

    let status = child.wait()?;
    settle(status, &captured)
}

/// Copy stdout chunks into the buffer, echoing them unless quiet.
///
/// Only a read error on the child's stdout is returned. If the sink rejects a
/// write, echoing stops and capture continues until EOF.
fn pump<R: Read, W: Write>(
    reader: &mut R,
    quiet: bool,
    sink: &mut W,
    captured: &mut Vec<u8>,
) -> std::io::Result<()> {
    let mut chunk = [0u8; 8192];
    let mut echo = !quiet;
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        captured.extend_from_slice(&chunk[..n]);
        if echo {
            if let Err(e) = sink.write_all(&chunk[..n]).and_then(|_| sink.flush()) {
                tracing::debug!("Stopped echoing command output: {}", e);
                echo = false;
            }
        }
    }
}

fn settle(status: ExitStatus, captured: &[u8]) -> Result<String> {
    match status.code() {
        Some(0) => Ok(String::from_utf8_lossy(captured).trim().to_string()),
        Some(code) => {
            tracing::debug!("Command exited with code {}", code);
            Err(ActkitError::CommandFailed { code })
        }
        None => Err(ActkitError::CommandKilled {
            signal: signal_of(&status),
        }),
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}
