//! Binary location.
//!
//! Walks a [`CandidateList`](crate::paths::CandidateList) in order and
//! returns the first candidate that is a regular file the current user can
//! execute.
//!
//! ## Architecture
//!
//! - `types`: [`Attempt`], [`AttemptOutcome`], [`LocateResult`]
//! - `fs`: filesystem checks behind a trait (injectable for testing)
//! - `locate`: the search itself
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use surgery_core::paths::CandidateList;
//! use surgery_core::platform::PlatformId;
//! use surgery_core::resolver::{LocateResult, locate};
//!
//! let list = CandidateList::generate(Path::new("/opt/surgery"), &PlatformId::host(), None);
//! match locate(&list, None) {
//!     LocateResult::Found { path, .. } => println!("{}", path.display()),
//!     LocateResult::NotFound { expected_name, .. } => eprintln!("missing {expected_name}"),
//! }
//! ```

mod fs;
mod locate;
mod types;

pub use fs::{FsProvider, SystemFs};
pub use locate::{locate, locate_with};
pub use types::{Attempt, AttemptOutcome, LocateResult};
