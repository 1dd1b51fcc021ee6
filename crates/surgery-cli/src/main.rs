//! CLI entry point - the composition root.
//!
//! Reads configuration, installs logging and hands off to [`surgery_cli::run`].
//! The process exits with whatever status `run` decides: the delegated
//! binary's own status, or a launcher failure code.

use surgery_core::LauncherConfig;

fn main() {
    let config = LauncherConfig::from_env();
    surgery_cli::logging::init(&config);

    // Everything after our own program name belongs to the delegated binary.
    let args: Vec<std::ffi::OsString> = std::env::args_os().skip(1).collect();

    std::process::exit(surgery_cli::run(&config, &args));
}
