#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod delegate;
pub mod diagnostics;
pub mod error;
pub mod naming;
pub mod paths;
pub mod platform;
pub mod resolver;

// Re-export commonly used types for convenience
pub use config::{EnvProvider, LauncherConfig, SystemEnv};
pub use delegate::{DelegationOutcome, delegate, run_and_wait};
pub use error::LauncherError;
pub use naming::{PRODUCT, binary_name, generic_binary_name};
pub use paths::{BIN_DIR, Candidate, CandidateList, InstallLocation, Tier};
pub use platform::{Arch, OsFamily, PlatformId};
pub use resolver::{Attempt, AttemptOutcome, LocateResult, locate};
