//! Failure reports for the launcher.
//!
//! Everything here writes to a caller-supplied [`Write`]; the CLI passes
//! stderr so stdout stays reserved for the delegated executable.

mod instructions;
mod listing;
mod style;

use std::io::{self, Write};
use std::path::Path;

use crate::resolver::{Attempt, SystemFs};

pub use instructions::{SOURCE_REPO, build_command, write_build_instructions};
pub use listing::{DirListing, ListedEntry};
pub use style::Style;

/// Report a failed search: what was expected, where, every path probed,
/// what is there instead, and how to build the missing file.
pub fn report_not_found(
    out: &mut dyn Write,
    expected_name: &str,
    searched_dir: &Path,
    attempts: &[Attempt],
    style: Style,
) -> io::Result<()> {
    let listing = DirListing::read(searched_dir, &SystemFs);
    write_not_found(out, expected_name, searched_dir, attempts, &listing, style)
}

/// Render a not-found report from an already-read listing.
pub fn write_not_found(
    out: &mut dyn Write,
    expected_name: &str,
    searched_dir: &Path,
    attempts: &[Attempt],
    listing: &DirListing,
    style: Style,
) -> io::Result<()> {
    let dir_label = searched_dir
        .file_name()
        .map_or_else(|| searched_dir.display().to_string(), |n| n.to_string_lossy().into_owned());

    writeln!(
        out,
        "{}{}Error: surgery binary not found for your platform.{}",
        style.bold, style.red, style.reset
    )?;
    writeln!(out, "Expected: {expected_name}")?;
    writeln!(out, "Looked in: {}", searched_dir.display())?;

    if !attempts.is_empty() {
        writeln!(out)?;
        writeln!(out, "Searched:")?;
        for attempt in attempts {
            writeln!(
                out,
                "  {:<13} {}: {}",
                attempt.candidate.tier,
                attempt.candidate.path.display(),
                attempt.outcome
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Available files in {dir_label}/:")?;

    match listing {
        DirListing::Missing => writeln!(out, "  ({dir_label}/ directory missing)")?,
        DirListing::NotADirectory => writeln!(out, "  ({dir_label} exists but is not a directory)")?,
        DirListing::Unreadable(reason) => writeln!(out, "  (cannot read {dir_label}/: {reason})")?,
        DirListing::Entries(entries) if entries.is_empty() => {
            writeln!(out, "  ({dir_label}/ is empty)")?;
        }
        DirListing::Entries(entries) => {
            for entry in entries {
                let (color, mark) = if entry.executable {
                    (style.green, "✓")
                } else {
                    (style.red, "✗")
                };
                writeln!(out, "  {color}{mark}{} {}", style.reset, entry.name)?;
            }
        }
    }

    write_build_instructions(out, &searched_dir.join(expected_name), style)
}

/// Report that a located binary could not be started.
pub fn report_launch_failure(
    out: &mut dyn Write,
    path: &Path,
    error: &io::Error,
    style: Style,
) -> io::Result<()> {
    writeln!(
        out,
        "{}{}Error: failed to launch {}: {error}{}",
        style.bold,
        style.red,
        path.display(),
        style.reset
    )?;
    if let Some(hint) = launch_failure_hint(error) {
        writeln!(out, "Hint: {hint}")?;
    }
    Ok(())
}

fn launch_failure_hint(error: &io::Error) -> Option<&'static str> {
    if is_exec_format_error(error) {
        return Some("the file is not a valid executable for this platform; rebuild it for this OS and architecture");
    }
    match error.kind() {
        io::ErrorKind::PermissionDenied => Some(
            "check the file's execute permission and that its filesystem is not mounted noexec",
        ),
        io::ErrorKind::NotFound => {
            Some("the file was removed after it was located, or its interpreter is missing")
        }
        _ => None,
    }
}

#[cfg(unix)]
fn is_exec_format_error(error: &io::Error) -> bool {
    error.raw_os_error() == Some(nix::errno::Errno::ENOEXEC as i32)
}

#[cfg(windows)]
fn is_exec_format_error(error: &io::Error) -> bool {
    // ERROR_BAD_EXE_FORMAT
    error.raw_os_error() == Some(193)
}

#[cfg(not(any(unix, windows)))]
const fn is_exec_format_error(_error: &io::Error) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{Candidate, Tier};
    use crate::resolver::AttemptOutcome;
    use std::path::PathBuf;

    fn render(listing: &DirListing) -> String {
        render_with(&[], listing)
    }

    fn render_with(attempts: &[Attempt], listing: &DirListing) -> String {
        let mut out = Vec::new();
        write_not_found(
            &mut out,
            "surgery-linux-amd64",
            Path::new("/opt/surgery/bin"),
            attempts,
            listing,
            Style::PLAIN,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_names_expected_file_and_directory() {
        let text = render(&DirListing::Entries(Vec::new()));

        assert!(text.starts_with("Error: surgery binary not found for your platform.\n"));
        assert!(text.contains("Expected: surgery-linux-amd64\n"));
        assert!(text.contains("Looked in: /opt/surgery/bin\n"));
    }

    #[test]
    fn missing_directory_is_stated_explicitly() {
        let text = render(&DirListing::Missing);
        assert!(text.contains("(bin/ directory missing)"));
    }

    #[test]
    fn entries_carry_markers() {
        let text = render(&DirListing::Entries(vec![
            ListedEntry {
                name: "surgery-darwin-arm64".into(),
                executable: true,
            },
            ListedEntry {
                name: "surgery-linux-amd64".into(),
                executable: false,
            },
        ]));

        assert!(text.contains("  ✓ surgery-darwin-arm64\n"));
        assert!(text.contains("  ✗ surgery-linux-amd64\n"));
    }

    #[test]
    fn probed_candidates_are_listed_with_outcomes() {
        let attempts = vec![
            Attempt {
                candidate: Candidate {
                    tier: Tier::Override,
                    path: PathBuf::from("/home/me/surgery-dev"),
                },
                outcome: AttemptOutcome::NotExecutable,
            },
            Attempt {
                candidate: Candidate {
                    tier: Tier::BinPlatform,
                    path: PathBuf::from("/opt/surgery/bin/surgery-linux-amd64"),
                },
                outcome: AttemptOutcome::NotFound,
            },
        ];

        let text = render_with(&attempts, &DirListing::Missing);

        assert!(text.contains("Searched:\n"));
        assert!(text.contains("override      /home/me/surgery-dev: not executable\n"));
        assert!(text.contains("bin/platform  /opt/surgery/bin/surgery-linux-amd64: not found\n"));
        let searched = text.find("Searched:").unwrap();
        let listing = text.find("Available files").unwrap();
        assert!(searched < listing);
    }

    #[test]
    fn no_attempts_means_no_searched_block() {
        let text = render(&DirListing::Missing);
        assert!(!text.contains("Searched:"));
    }

    #[test]
    fn remediation_targets_expected_location() {
        let text = render(&DirListing::Missing);
        assert!(text.contains("go build -o /opt/surgery/bin/surgery-linux-amd64 ./cli"));
    }

    #[test]
    fn plain_style_has_no_escape_codes() {
        let text = render(&DirListing::Missing);
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn reads_real_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        report_not_found(
            &mut out,
            "surgery-linux-amd64",
            &dir.path().join("bin"),
            &[],
            Style::PLAIN,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(bin/ directory missing)"));
    }

    #[test]
    fn launch_failure_includes_path_and_hint() {
        let mut out = Vec::new();
        let error = io::Error::from(io::ErrorKind::PermissionDenied);
        report_launch_failure(
            &mut out,
            Path::new("/opt/surgery/bin/surgery-linux-amd64"),
            &error,
            Style::PLAIN,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("failed to launch /opt/surgery/bin/surgery-linux-amd64"));
        assert!(text.contains("Hint: check the file's execute permission"));
    }

    #[cfg(unix)]
    #[test]
    fn exec_format_error_gets_platform_hint() {
        let error = io::Error::from_raw_os_error(nix::errno::Errno::ENOEXEC as i32);
        let hint = launch_failure_hint(&error).unwrap();
        assert!(hint.contains("not a valid executable"));
    }
}
