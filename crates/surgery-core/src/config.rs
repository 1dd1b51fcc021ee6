//! Launcher configuration sourced from environment variables.
//!
//! The launcher owns no command-line flags; every argument belongs to the
//! delegated executable. The few knobs it has are read once at startup:
//!
//! - `SURGERY_HOME`: installation root override
//! - `SURGERY_BINARY`: explicit executable, probed before every other candidate
//! - `SURGERY_LOG`: `tracing` filter directive for launcher logs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Installation root override.
pub const HOME_ENV: &str = "SURGERY_HOME";
/// Explicit executable override.
pub const BINARY_ENV: &str = "SURGERY_BINARY";
/// Log filter directive.
pub const LOG_ENV: &str = "SURGERY_LOG";

/// Filter used when `SURGERY_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Source of environment variables (injectable for testing).
pub trait EnvProvider {
    /// Get a raw environment variable.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Get a variable, treating an empty value as unset.
    fn get_non_empty(&self, key: &str) -> Option<OsString> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

/// Reads from the real process environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, OsString>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

/// Resolved launcher settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Overrides the directory the launcher is installed in.
    pub home_override: Option<PathBuf>,
    /// Explicit executable to try first.
    pub binary_override: Option<PathBuf>,
    /// `tracing` filter directive.
    pub log_filter: Option<String>,
}

impl LauncherConfig {
    /// Read configuration from the process environment.
    ///
    /// Relative overrides are anchored at the current directory.
    pub fn from_env() -> Self {
        let config = Self::from_provider(&SystemEnv);
        match std::env::current_dir() {
            Ok(cwd) => config.anchored_at(&cwd),
            Err(_) => config,
        }
    }

    /// Read configuration through an injected provider.
    pub fn from_provider(env: &dyn EnvProvider) -> Self {
        Self {
            home_override: env.get_non_empty(HOME_ENV).map(PathBuf::from),
            binary_override: env.get_non_empty(BINARY_ENV).map(PathBuf::from),
            log_filter: env
                .get_non_empty(LOG_ENV)
                .map(|value| value.to_string_lossy().into_owned()),
        }
    }

    /// Make relative override paths absolute against `cwd`.
    ///
    /// A bare `SURGERY_BINARY=name` must name `<cwd>/name`: handing a
    /// slash-free path to the OS would search `PATH` instead of running the
    /// file that was checked.
    #[must_use]
    pub fn anchored_at(mut self, cwd: &Path) -> Self {
        let anchor = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                cwd.join(path)
            }
        };
        self.home_override = self.home_override.map(anchor);
        self.binary_override = self.binary_override.map(anchor);
        self
    }

    /// The log filter to install, falling back to [`DEFAULT_LOG_FILTER`].
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_yields_defaults() {
        let config = LauncherConfig::from_provider(&MockEnv::new());
        assert_eq!(config, LauncherConfig::default());
        assert_eq!(config.log_filter_or_default(), "warn");
    }

    #[test]
    fn reads_all_overrides() {
        let env = MockEnv::new()
            .with_var(HOME_ENV, "/opt/surgery")
            .with_var(BINARY_ENV, "/tmp/surgery-dev")
            .with_var(LOG_ENV, "debug");
        let config = LauncherConfig::from_provider(&env);

        assert_eq!(config.home_override, Some(PathBuf::from("/opt/surgery")));
        assert_eq!(config.binary_override, Some(PathBuf::from("/tmp/surgery-dev")));
        assert_eq!(config.log_filter_or_default(), "debug");
    }

    #[test]
    fn relative_overrides_are_anchored_at_cwd() {
        let env = MockEnv::new()
            .with_var(HOME_ENV, "dist")
            .with_var(BINARY_ENV, "surgery-dev");
        let config = LauncherConfig::from_provider(&env).anchored_at(Path::new("/work"));

        assert_eq!(config.home_override, Some(PathBuf::from("/work/dist")));
        assert_eq!(config.binary_override, Some(PathBuf::from("/work/surgery-dev")));
    }

    #[test]
    fn absolute_overrides_are_left_alone() {
        let env = MockEnv::new().with_var(BINARY_ENV, "/tmp/surgery-dev");
        let config = LauncherConfig::from_provider(&env).anchored_at(Path::new("/work"));

        assert_eq!(config.binary_override, Some(PathBuf::from("/tmp/surgery-dev")));
        assert!(config.home_override.is_none());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let env = MockEnv::new().with_var(HOME_ENV, "").with_var(LOG_ENV, "");
        let config = LauncherConfig::from_provider(&env);

        assert!(config.home_override.is_none());
        assert!(config.log_filter.is_none());
    }
}
