//! Installation root detection.
//!
//! The root is where the launcher itself lives. It is resolved once per run
//! from the running executable, or taken from `SURGERY_HOME` when set.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LauncherError;

/// Where the launcher is installed and which file it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLocation {
    /// Directory the candidate tiers are relative to.
    pub root: PathBuf,
    /// Canonical path of the running launcher, when known.
    ///
    /// Used to avoid delegating to ourselves.
    pub launcher: Option<PathBuf>,
}

impl InstallLocation {
    /// Resolve the install location for the running process.
    pub fn detect(home_override: Option<&Path>) -> Result<Self, LauncherError> {
        Self::from_parts(home_override, std::env::current_exe(), std::env::current_dir())
    }

    /// Resolve from explicit inputs.
    ///
    /// Resolution order:
    /// 1. `home_override` (made absolute against `cwd` when relative)
    /// 2. Directory containing the canonicalized launcher executable
    pub fn from_parts(
        home_override: Option<&Path>,
        current_exe: io::Result<PathBuf>,
        cwd: io::Result<PathBuf>,
    ) -> Result<Self, LauncherError> {
        let current_exe = current_exe.map(|exe| exe.canonicalize().unwrap_or(exe));

        if let Some(home) = home_override {
            let root = if home.is_absolute() {
                home.to_path_buf()
            } else {
                cwd.map(|dir| dir.join(home))
                    .map_err(|e| LauncherError::InstallRoot(e.to_string()))?
            };
            debug!(root = %root.display(), "Using install root from SURGERY_HOME");
            return Ok(Self {
                root,
                launcher: current_exe.ok(),
            });
        }

        let exe = current_exe.map_err(|e| LauncherError::InstallRoot(e.to_string()))?;
        let root = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                LauncherError::InstallRoot(format!("{} has no parent directory", exe.display()))
            })?;

        debug!(root = %root.display(), "Using launcher directory as install root");
        Ok(Self {
            root,
            launcher: Some(exe),
        })
    }
}
