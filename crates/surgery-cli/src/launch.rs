//! Locate-then-delegate flow.

use std::ffi::OsString;
use std::io::{self, Write};

use surgery_core::diagnostics::{self, Style};
use surgery_core::{
    CandidateList, InstallLocation, LauncherConfig, LauncherError, LocateResult, PlatformId,
    delegate, locate,
};
use tracing::debug;

/// Run one launcher invocation and return the exit code for the process.
///
/// - Binary found: the delegated binary's status (on Unix the process is
///   replaced and this only returns if the exec fails)
/// - No binary: diagnostics on stderr, exit code 1
/// - Binary found but not startable: report on stderr, exit code 126
pub fn run(config: &LauncherConfig, args: &[OsString]) -> i32 {
    let platform = PlatformId::host();
    debug!(%platform, "Detected host platform");

    let location = match InstallLocation::detect(config.home_override.as_deref()) {
        Ok(location) => location,
        Err(err) => return fail(&err),
    };

    let candidates =
        CandidateList::generate(&location.root, &platform, config.binary_override.as_deref());

    match locate(&candidates, location.launcher.as_deref()) {
        LocateResult::Found { path, .. } => match delegate(&path, args) {
            Ok(outcome) => {
                debug!(%outcome, "Mirroring delegated exit status");
                outcome.exit_code()
            }
            Err(err) => report_delegation_failure(&err),
        },
        LocateResult::NotFound {
            expected_name,
            searched_dir,
            attempts,
        } => {
            log_write_failure(diagnostics::report_not_found(
                &mut io::stderr().lock(),
                &expected_name,
                &searched_dir,
                &attempts,
                Style::for_stderr(),
            ));
            LauncherError::BinaryNotFound {
                expected_name,
                searched_dir,
            }
            .exit_code()
        }
    }
}

fn report_delegation_failure(err: &LauncherError) -> i32 {
    match err {
        LauncherError::LaunchFailure { path, source } => {
            log_write_failure(diagnostics::report_launch_failure(
                &mut io::stderr().lock(),
                path,
                source,
                Style::for_stderr(),
            ));
            err.exit_code()
        }
        other => fail(other),
    }
}

fn fail(err: &LauncherError) -> i32 {
    let style = Style::for_stderr();
    log_write_failure(writeln!(
        io::stderr().lock(),
        "{}{}Error: {err}{}",
        style.bold,
        style.red,
        style.reset
    ));
    err.exit_code()
}

/// Stderr write errors are logged and never change the exit code.
fn log_write_failure(result: io::Result<()>) {
    if let Err(e) = result {
        debug!(error = %e, "Could not write diagnostics to stderr");
    }
}
