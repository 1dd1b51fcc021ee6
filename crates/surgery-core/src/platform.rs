//! Host platform detection and normalization.
//!
//! Raw operating-system and machine identifiers are folded into a small
//! canonical vocabulary once per invocation. Everything downstream works on
//! the resulting [`PlatformId`] value and never queries the host again.

use std::fmt;

/// Operating system family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Linux,
    Darwin,
    Windows,
    /// Unrecognized system, kept exactly as reported.
    Other(String),
}

impl OsFamily {
    /// Normalize a host-reported OS identifier (case-insensitive).
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::Darwin,
            "windows" => Self::Windows,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Whether executables on this OS carry an `.exe` suffix.
    pub const fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Darwin => write!(f, "darwin"),
            Self::Windows => write!(f, "windows"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// CPU architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arch {
    /// `x86_64` / `amd64`
    Amd64,
    /// `aarch64` / `arm64`
    Arm64,
    /// Unrecognized machine string, kept exactly as reported.
    Other(String),
}

impl Arch {
    /// Normalize a host-reported machine identifier (case-insensitive).
    ///
    /// Unknown values pass through untouched so the search can still be
    /// attempted on unfamiliar hardware.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" => Self::Amd64,
            "aarch64" | "arm64" => Self::Arm64,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// The architecture tag used in artifact file names.
    pub fn tag(&self) -> &str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Immutable description of the host an invocation runs on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformId {
    pub os: OsFamily,
    pub arch: Arch,
}

impl PlatformId {
    /// Build a platform id from raw host strings.
    pub fn from_raw(os: &str, machine: &str) -> Self {
        Self {
            os: OsFamily::normalize(os),
            arch: Arch::normalize(machine),
        }
    }

    /// Detect the platform this launcher was built for.
    ///
    /// The compile-time target is what the launcher itself runs as, so it is
    /// also the artifact flavour guaranteed to run next to it.
    pub fn host() -> Self {
        Self::from_raw(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// The OS segment used in artifact names.
    ///
    /// Unrecognized systems (Android, the BSDs, ...) use the Linux build.
    pub const fn os_segment(&self) -> &'static str {
        match self.os {
            OsFamily::Darwin => "darwin",
            OsFamily::Windows => "windows",
            OsFamily::Linux | OsFamily::Other(_) => "linux",
        }
    }

    /// Executable suffix for this platform (`.exe` on Windows, empty elsewhere).
    pub const fn exe_suffix(&self) -> &'static str {
        if self.os.is_windows() { ".exe" } else { "" }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
