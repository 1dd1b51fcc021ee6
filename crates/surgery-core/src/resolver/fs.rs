//! Filesystem provider trait for testable binary location.

use std::io;
use std::path::Path;

use super::types::AttemptOutcome;

/// Filesystem checks needed by the locator (injectable for testing).
pub trait FsProvider {
    /// Check that `path` is a regular file the current user may execute.
    fn check_executable(&self, path: &Path) -> AttemptOutcome;

    /// Whether two paths name the same file on disk.
    fn same_file(&self, a: &Path, b: &Path) -> bool;
}

/// Production filesystem provider.
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => return outcome_for_io_error(&e),
        };

        if !metadata.is_file() {
            return AttemptOutcome::NotAFile;
        }

        current_user_can_execute(path)
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (a.canonicalize(), b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

fn outcome_for_io_error(e: &io::Error) -> AttemptOutcome {
    match e.kind() {
        io::ErrorKind::NotFound => AttemptOutcome::NotFound,
        io::ErrorKind::PermissionDenied => AttemptOutcome::PermissionDenied,
        _ => AttemptOutcome::IoError(e.to_string()),
    }
}

/// Ask the kernel whether the real user may execute `path`.
///
/// Mode bits alone are not enough: they ignore ownership, ACLs and
/// `noexec` mounts.
#[cfg(unix)]
fn current_user_can_execute(path: &Path) -> AttemptOutcome {
    use nix::errno::Errno;
    use nix::unistd::{AccessFlags, access};

    match access(path, AccessFlags::X_OK) {
        Ok(()) => AttemptOutcome::Ok,
        Err(Errno::EACCES) => AttemptOutcome::NotExecutable,
        Err(Errno::ENOENT) => AttemptOutcome::NotFound,
        Err(errno) => AttemptOutcome::IoError(errno.desc().to_string()),
    }
}

/// Any regular file is runnable on platforms without execute bits.
#[cfg(not(unix))]
const fn current_user_can_execute(_path: &Path) -> AttemptOutcome {
    AttemptOutcome::Ok
}

/// Test/mock filesystem provider with predefined responses.
#[cfg(test)]
#[derive(Default)]
pub struct MockFs {
    executables: std::collections::HashSet<std::path::PathBuf>,
    non_executables: std::collections::HashSet<std::path::PathBuf>,
    directories: std::collections::HashSet<std::path::PathBuf>,
}

#[cfg(test)]
impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_non_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.non_executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_directory(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.directories.insert(path.into());
        self
    }
}

#[cfg(test)]
impl FsProvider for MockFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        if self.executables.contains(path) {
            AttemptOutcome::Ok
        } else if self.non_executables.contains(path) {
            AttemptOutcome::NotExecutable
        } else if self.directories.contains(path) {
            AttemptOutcome::NotAFile
        } else {
            AttemptOutcome::NotFound
        }
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        a == b
    }
}
