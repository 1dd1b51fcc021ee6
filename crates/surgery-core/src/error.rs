//! Launcher error taxonomy.
//!
//! A child that exits non-zero is not an error here: its status travels as a
//! [`DelegationOutcome`](crate::delegate::DelegationOutcome) and is mirrored
//! unchanged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a launcher invocation before or instead of delegation.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// No candidate passed the existence and execute checks.
    #[error("surgery binary not found for your platform (expected {expected_name} in {})", .searched_dir.display())]
    BinaryNotFound {
        /// The platform-specific name that was expected.
        expected_name: String,
        /// The directory that was expected to contain it.
        searched_dir: PathBuf,
    },

    /// A binary was located but could not be started.
    #[error("failed to launch {}: {source}", .path.display())]
    LaunchFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The installation root could not be determined.
    #[error("cannot determine launcher install directory: {0}")]
    InstallRoot(String),
}

impl LauncherError {
    /// Exit code for the launcher process.
    ///
    /// - 1: no matching executable
    /// - 126: executable found but could not be run (shell convention)
    /// - 74: install directory unavailable (`EX_IOERR`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::BinaryNotFound { .. } => 1,
            Self::LaunchFailure { .. } => 126,
            Self::InstallRoot(_) => 74,
        }
    }
}
