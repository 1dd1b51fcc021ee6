//! Directory listing with execute-permission annotations.

use std::io;
use std::path::Path;

use crate::resolver::{AttemptOutcome, FsProvider};

/// One entry of the searched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    /// Whether the locator would accept this file.
    pub executable: bool,
}

/// Contents of the directory the binary was expected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirListing {
    /// The directory does not exist.
    Missing,
    /// The path exists but is not a directory.
    NotADirectory,
    /// The directory could not be read.
    Unreadable(String),
    /// Entries sorted by name.
    Entries(Vec<ListedEntry>),
}

impl DirListing {
    /// Read `dir`, annotating every entry with the locator's execute check.
    pub fn read(dir: &Path, fs: &dyn FsProvider) -> Self {
        match std::fs::metadata(dir) {
            Ok(meta) if !meta.is_dir() => return Self::NotADirectory,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::Missing,
            Err(e) => return Self::Unreadable(e.to_string()),
        }

        let read_dir = match std::fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => return Self::Unreadable(e.to_string()),
        };

        let mut entries: Vec<ListedEntry> = read_dir
            .filter_map(Result::ok)
            .map(|entry| ListedEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                executable: fs.check_executable(&entry.path()) == AttemptOutcome::Ok,
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Self::Entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::SystemFs;

    #[test]
    fn missing_directory_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let listing = DirListing::read(&dir.path().join("bin"), &SystemFs);
        assert_eq!(listing, DirListing::Missing);
    }

    #[test]
    fn file_in_place_of_directory() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        std::fs::write(&bin, b"").unwrap();

        assert_eq!(DirListing::read(&bin, &SystemFs), DirListing::NotADirectory);
    }

    #[test]
    fn empty_directory_has_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            DirListing::read(dir.path(), &SystemFs),
            DirListing::Entries(Vec::new())
        );
    }

    #[cfg(unix)]
    #[test]
    fn entries_are_sorted_and_annotated() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let names = ["surgery-linux-arm64", "README", "surgery-darwin-amd64"];
        for name in names {
            std::fs::write(dir.path().join(name), b"#!/bin/sh\n").unwrap();
        }
        std::fs::set_permissions(
            dir.path().join("surgery-linux-arm64"),
            std::fs::Permissions::from_mode(0o755),
        )
        .unwrap();
        std::fs::set_permissions(
            dir.path().join("surgery-darwin-amd64"),
            std::fs::Permissions::from_mode(0o644),
        )
        .unwrap();
        std::fs::set_permissions(
            dir.path().join("README"),
            std::fs::Permissions::from_mode(0o644),
        )
        .unwrap();

        let DirListing::Entries(entries) = DirListing::read(dir.path(), &SystemFs) else {
            panic!("expected entries");
        };

        let summary: Vec<(&str, bool)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.executable))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("README", false),
                ("surgery-darwin-amd64", false),
                ("surgery-linux-arm64", true),
            ]
        );
    }
}
