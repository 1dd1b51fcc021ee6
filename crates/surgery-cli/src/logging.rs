//! Launcher log setup.
//!
//! Logs go to stderr only; stdout belongs to the delegated binary.

use surgery_core::LauncherConfig;
use surgery_core::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// An unparsable `SURGERY_LOG` falls back to the default filter rather than
/// aborting the launch.
pub fn init(config: &LauncherConfig) {
    let requested = config.log_filter_or_default();
    let (filter, rejected) = match EnvFilter::try_new(requested) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_FILTER), true),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed && rejected {
        tracing::warn!("Invalid SURGERY_LOG filter {requested:?}, using {DEFAULT_LOG_FILTER:?}");
    }
}
