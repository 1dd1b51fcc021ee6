//! Types for binary location.

use std::path::PathBuf;

use crate::paths::{Candidate, Tier};

/// A single probe of a candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// The candidate that was checked.
    pub candidate: Candidate,
    /// What the check found.
    pub outcome: AttemptOutcome,
}

/// Result of checking whether a candidate can be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Regular file the current user may execute.
    Ok,
    /// Path does not exist.
    NotFound,
    /// Path exists but is not a regular file.
    NotAFile,
    /// File exists but the current user lacks execute permission.
    NotExecutable,
    /// Metadata could not be read (e.g. unsearchable parent directory).
    PermissionDenied,
    /// The candidate is the running launcher itself.
    IsLauncher,
    /// Other I/O error.
    IoError(String),
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "not found"),
            Self::NotAFile => write!(f, "not a regular file"),
            Self::NotExecutable => write!(f, "not executable"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsLauncher => write!(f, "is this launcher"),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

/// Outcome of walking a candidate list.
///
/// Exactly one of the two; there is no partial match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateResult {
    /// First candidate that passed both checks.
    Found {
        path: PathBuf,
        tier: Tier,
        attempts: Vec<Attempt>,
    },
    /// Every candidate was rejected.
    NotFound {
        /// Platform-specific name that was expected.
        expected_name: String,
        /// Directory that was expected to contain it.
        searched_dir: PathBuf,
        attempts: Vec<Attempt>,
    },
}

impl LocateResult {
    /// Every probe made, in order.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            Self::Found { attempts, .. } | Self::NotFound { attempts, .. } => attempts,
        }
    }

    /// The located path, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound { .. } => None,
        }
    }
}
