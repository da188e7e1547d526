use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Separator between an archive path and the entry path inside it (`lib.jar!/a/B.class`).
pub const ARCHIVE_SEPARATOR: &str = "!/";

/// A live location: either a plain file/directory on the local filesystem,
/// or an entry inside an archive. The archive root has an empty entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    File { path: PathBuf },
    ArchiveEntry { archive: PathBuf, entry: String },
}

impl Location {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Location::File { path: path.into() }
    }

    pub fn archive_root(archive: impl Into<PathBuf>) -> Self {
        Location::ArchiveEntry {
            archive: archive.into(),
            entry: String::new(),
        }
    }

    pub fn archive_entry(archive: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        Location::ArchiveEntry {
            archive: archive.into(),
            entry: entry.into(),
        }
    }

    /// The archive file backing this location, if it lives inside one.
    pub fn archive_file(&self) -> Option<&Path> {
        match self {
            Location::File { .. } => None,
            Location::ArchiveEntry { archive, .. } => Some(archive),
        }
    }

    /// The local path this location maps to; archive entries map to their archive.
    pub fn io_path(&self) -> &Path {
        match self {
            Location::File { path } => path,
            Location::ArchiveEntry { archive, .. } => archive,
        }
    }

    /// Whether `other` is this location or lies below it.
    ///
    /// Archive contents are a separate tree: a directory never contains the
    /// entries of an archive stored below it, only the archive file itself.
    pub fn contains(&self, other: &Location) -> bool {
        match (self, other) {
            (Location::File { path: root }, Location::File { path }) => path.starts_with(root),
            (
                Location::ArchiveEntry {
                    archive: root_archive,
                    entry: root_entry,
                },
                Location::ArchiveEntry { archive, entry },
            ) => root_archive == archive && Path::new(entry).starts_with(root_entry),
            _ => false,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File { path } => write!(f, "{}", path.display()),
            Location::ArchiveEntry { archive, entry } => {
                write!(f, "{}{}{}", archive.display(), ARCHIVE_SEPARATOR, entry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_contains_nested_file() {
        let root = Location::file("/p/app/src/test/java");
        assert!(root.contains(&Location::file("/p/app/src/test/java/a/BTest.java")));
        assert!(root.contains(&root.clone()));
        assert!(!root.contains(&Location::file("/p/app/src/test/javax/C.java")));
    }

    #[test]
    fn test_archive_root_contains_entries_of_same_archive_only() {
        let root = Location::archive_root("/libs/junit.jar");
        assert!(root.contains(&Location::archive_entry("/libs/junit.jar", "org/junit/Test.class")));
        assert!(!root.contains(&Location::archive_entry("/libs/other.jar", "org/junit/Test.class")));
        assert!(!root.contains(&Location::file("/libs/junit.jar")));
    }

    #[test]
    fn test_directory_does_not_contain_archive_entries() {
        let dir = Location::file("/libs");
        assert!(!dir.contains(&Location::archive_entry("/libs/junit.jar", "org/junit/Test.class")));
        assert!(dir.contains(&Location::file("/libs/junit.jar")));
    }

    #[test]
    fn test_display_uses_archive_separator() {
        let entry = Location::archive_entry("/libs/junit.jar", "org/junit");
        assert_eq!(entry.to_string(), "/libs/junit.jar!/org/junit");
    }
}
