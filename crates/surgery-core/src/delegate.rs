//! Delegation to the located executable.
//!
//! Arguments are forwarded as `OsString`s exactly as received: no parsing,
//! re-quoting or re-encoding. Standard streams are inherited.
//!
//! On Unix the launcher replaces itself with the child (`exec`), so the
//! caller observes the child's exit status or terminating signal directly and
//! signals sent to the launcher's pid reach the child. Elsewhere the child is
//! spawned and waited on, and its exit code is mirrored.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::LauncherError;

/// How the delegated child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationOutcome {
    /// Normal exit with a status code.
    Exited(i32),
    /// Killed by a signal (Unix only).
    Signaled(i32),
    /// Platform reported neither a code nor a signal.
    Unknown,
}

impl DelegationOutcome {
    /// Classify a child's exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }
        Self::Unknown
    }

    /// Exit code the launcher should terminate with.
    ///
    /// Signals follow the shell convention of `128 + signal`.
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Exited(code) => code,
            Self::Signaled(signal) => 128 + signal,
            Self::Unknown => 128,
        }
    }

    pub const fn success(self) -> bool {
        matches!(self, Self::Exited(0))
    }
}

impl fmt::Display for DelegationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exited with code {code}"),
            Self::Signaled(signal) => write!(f, "killed by {}", signal_name(*signal)),
            Self::Unknown => write!(f, "terminated abnormally"),
        }
    }
}

#[cfg(unix)]
fn signal_name(signal: i32) -> String {
    nix::sys::signal::Signal::try_from(signal)
        .map_or_else(|_| format!("signal {signal}"), |s| s.as_str().to_string())
}

#[cfg(not(unix))]
fn signal_name(signal: i32) -> String {
    format!("signal {signal}")
}

fn command(path: &Path, args: &[OsString]) -> Command {
    let mut cmd = Command::new(path);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// Spawn `path` with `args`, block until it terminates and report how.
///
/// No timeout is applied.
pub fn run_and_wait(path: &Path, args: &[OsString]) -> Result<DelegationOutcome, LauncherError> {
    let launch_failure = |source| LauncherError::LaunchFailure {
        path: path.to_path_buf(),
        source,
    };

    debug!(path = %path.display(), argc = args.len(), "Spawning delegated binary");
    let mut child = command(path, args).spawn().map_err(launch_failure)?;
    let status = child.wait().map_err(launch_failure)?;

    let outcome = DelegationOutcome::from_status(status);
    debug!(%outcome, "Delegated binary finished");
    Ok(outcome)
}

/// Replace the current process with `path`.
///
/// Only returns if the exec itself failed.
#[cfg(unix)]
pub fn exec_replace(path: &Path, args: &[OsString]) -> LauncherError {
    use std::os::unix::process::CommandExt;

    debug!(path = %path.display(), argc = args.len(), "Replacing launcher with delegated binary");
    let source = command(path, args).exec();
    LauncherError::LaunchFailure {
        path: path.to_path_buf(),
        source,
    }
}

/// Hand the invocation over to `path`.
///
/// On Unix this does not return on success. Elsewhere it returns the child's
/// outcome once it has exited.
pub fn delegate(path: &Path, args: &[OsString]) -> Result<DelegationOutcome, LauncherError> {
    #[cfg(unix)]
    {
        Err(exec_replace(path, args))
    }

    #[cfg(not(unix))]
    {
        run_and_wait(path, args)
    }
}
