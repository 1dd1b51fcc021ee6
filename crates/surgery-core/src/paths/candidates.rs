//! Ordered candidate locations for the delegated executable.
//!
//! The search is expressed as data: each [`Tier`] knows which directory it
//! looks in and which file name it expects, and [`TIER_ORDER`] fixes the
//! priority. Adding a layout means adding a tier, not another branch.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::naming::{binary_name, generic_binary_name};
use crate::platform::PlatformId;

/// Name of the directory (relative to the install root) holding the artifacts.
pub const BIN_DIR: &str = "bin";

/// Priority level of a candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Path given explicitly through `SURGERY_BINARY`.
    Override,
    /// `<root>/bin/<product>-<os>-<arch>[.exe]` (packaged layout)
    BinPlatform,
    /// `<root>/bin/<product>[.exe]`
    BinGeneric,
    /// `<root>/<product>-<os>-<arch>[.exe]`
    FlatPlatform,
    /// `<root>/<product>[.exe]` (from-source layout)
    FlatGeneric,
}

/// Search order for the install-relative tiers, highest priority first.
pub const TIER_ORDER: [Tier; 4] = [
    Tier::BinPlatform,
    Tier::BinGeneric,
    Tier::FlatPlatform,
    Tier::FlatGeneric,
];

impl Tier {
    /// Short label used in logs and diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::BinPlatform => "bin/platform",
            Self::BinGeneric => "bin/generic",
            Self::FlatPlatform => "flat/platform",
            Self::FlatGeneric => "flat/generic",
        }
    }

    const fn in_bin_dir(self) -> bool {
        matches!(self, Self::BinPlatform | Self::BinGeneric)
    }

    const fn platform_specific(self) -> bool {
        matches!(self, Self::BinPlatform | Self::FlatPlatform)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A single location to probe, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub tier: Tier,
    pub path: PathBuf,
}

/// Ordered candidates plus the context needed to explain a failed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    /// Platform-specific name that the packaged layout should contain.
    pub expected_name: String,
    /// Directory expected to contain `expected_name`.
    pub bin_dir: PathBuf,
    /// Candidates, highest priority first.
    pub candidates: Vec<Candidate>,
}

impl CandidateList {
    /// Build the candidate sequence for an install root.
    ///
    /// An explicit override, when given, is probed before every tier.
    pub fn generate(
        install_root: &Path,
        platform: &PlatformId,
        binary_override: Option<&Path>,
    ) -> Self {
        let specific = binary_name(platform);
        let generic = generic_binary_name(platform);
        let bin_dir = install_root.join(BIN_DIR);

        let override_candidate = binary_override.map(|path| Candidate {
            tier: Tier::Override,
            path: path.to_path_buf(),
        });

        let tiered = TIER_ORDER.iter().map(|&tier| {
            let dir = if tier.in_bin_dir() {
                bin_dir.as_path()
            } else {
                install_root
            };
            let name = if tier.platform_specific() {
                &specific
            } else {
                &generic
            };
            Candidate {
                tier,
                path: dir.join(name),
            }
        });

        let candidates = override_candidate.into_iter().chain(tiered).collect();

        Self {
            expected_name: specific,
            bin_dir,
            candidates,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_amd64() -> PlatformId {
        PlatformId::from_raw("linux", "x86_64")
    }

    #[test]
    fn tiers_are_ordered_packaged_first() {
        let root = Path::new("/opt/surgery");
        let list = CandidateList::generate(root, &linux_amd64(), None);

        let paths: Vec<PathBuf> = list.iter().map(|c| c.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/opt/surgery/bin/surgery-linux-amd64"),
                PathBuf::from("/opt/surgery/bin/surgery"),
                PathBuf::from("/opt/surgery/surgery-linux-amd64"),
                PathBuf::from("/opt/surgery/surgery"),
            ]
        );
        assert_eq!(list.expected_name, "surgery-linux-amd64");
        assert_eq!(list.bin_dir, PathBuf::from("/opt/surgery/bin"));
    }

    #[test]
    fn override_goes_first() {
        let root = Path::new("/opt/surgery");
        let list =
            CandidateList::generate(root, &linux_amd64(), Some(Path::new("/dev/surgery-local")));

        assert_eq!(list.len(), 5);
        assert_eq!(list.candidates[0].tier, Tier::Override);
        assert_eq!(list.candidates[0].path, PathBuf::from("/dev/surgery-local"));
        assert_eq!(list.candidates[1].tier, Tier::BinPlatform);
    }

    #[test]
    fn windows_candidates_use_exe() {
        let root = Path::new("/pkg");
        let list = CandidateList::generate(root, &PlatformId::from_raw("windows", "arm64"), None);

        assert!(
            list.iter()
                .all(|c| c.path.to_string_lossy().ends_with(".exe"))
        );
        assert_eq!(list.expected_name, "surgery-windows-arm64.exe");
    }

    #[test]
    fn generation_is_stable() {
        let root = Path::new("/opt/surgery");
        let first = CandidateList::generate(root, &linux_amd64(), None);
        let second = CandidateList::generate(root, &linux_amd64(), None);
        assert_eq!(first, second);
    }
}
