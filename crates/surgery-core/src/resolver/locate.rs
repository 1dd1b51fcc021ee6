//! Linear, first-match-wins search over a candidate list.

use std::path::Path;

use tracing::{debug, info, warn};

use super::fs::{FsProvider, SystemFs};
use super::types::{Attempt, AttemptOutcome, LocateResult};
use crate::paths::{CandidateList, Tier};

/// Locate the delegated executable on the real filesystem.
///
/// `launcher` is the running launcher's own path; a candidate naming the same
/// file is skipped.
pub fn locate(candidates: &CandidateList, launcher: Option<&Path>) -> LocateResult {
    locate_with(candidates, launcher, &SystemFs)
}

/// Locate with an injected filesystem (for testing).
///
/// A candidate must be a regular file *and* executable by the current user.
/// A present-but-not-executable file is treated exactly like a missing one:
/// it is recorded and the search moves on.
pub fn locate_with(
    candidates: &CandidateList,
    launcher: Option<&Path>,
    fs: &dyn FsProvider,
) -> LocateResult {
    let mut attempts = Vec::with_capacity(candidates.len());

    for candidate in candidates.iter() {
        let outcome = if launcher.is_some_and(|exe| fs.same_file(&candidate.path, exe)) {
            AttemptOutcome::IsLauncher
        } else {
            fs.check_executable(&candidate.path)
        };

        debug!(
            tier = %candidate.tier,
            path = %candidate.path.display(),
            outcome = %outcome,
            "Probed candidate"
        );

        let found = outcome == AttemptOutcome::Ok;
        if !found && candidate.tier == Tier::Override {
            warn!(
                "Ignoring SURGERY_BINARY={} ({outcome}), falling back to bundled binaries",
                candidate.path.display()
            );
        }

        attempts.push(Attempt {
            candidate: candidate.clone(),
            outcome,
        });

        if found {
            info!(tier = %candidate.tier, "Using {}", candidate.path.display());
            return LocateResult::Found {
                path: candidate.path.clone(),
                tier: candidate.tier,
                attempts,
            };
        }
    }

    LocateResult::NotFound {
        expected_name: candidates.expected_name.clone(),
        searched_dir: candidates.bin_dir.clone(),
        attempts,
    }
}
