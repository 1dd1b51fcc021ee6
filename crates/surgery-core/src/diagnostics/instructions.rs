//! Build-from-source remediation steps.

use std::io::{self, Write};
use std::path::Path;

use super::style::Style;

/// Upstream source repository.
pub const SOURCE_REPO: &str = "https://github.com/ankit-chaubey/media-metadata-surgery";
/// Directory created by cloning [`SOURCE_REPO`].
const SOURCE_DIR: &str = "media-metadata-surgery";
/// Go package containing the executable's entry point.
const CLI_PACKAGE: &str = "./cli";

/// The `go build` command that writes the missing executable to `target`.
pub fn build_command(target: &Path) -> String {
    let target = target.display().to_string();
    let target = if target.contains(char::is_whitespace) {
        format!("\"{target}\"")
    } else {
        target
    };
    format!("go build -o {target} {CLI_PACKAGE}")
}

/// Print the clone and build steps that produce `target`.
pub fn write_build_instructions(out: &mut dyn Write, target: &Path, style: Style) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}To build from source:{}", style.bold, style.reset)?;
    for command in [
        format!("git clone {SOURCE_REPO}"),
        format!("cd {SOURCE_DIR}"),
        build_command(target),
    ] {
        writeln!(out, "  {}{command}{}", style.blue, style.reset)?;
    }
    Ok(())
}
