//! Path resolution for the launcher.
//!
//! - Install root: where the launcher lives (or `SURGERY_HOME`)
//! - Candidates: the ordered list of places the delegated executable may be
//!
//! No filesystem probing happens here; see [`crate::resolver`] for that.

mod candidates;
mod install;

pub use candidates::{BIN_DIR, Candidate, CandidateList, TIER_ORDER, Tier};
pub use install::InstallLocation;
