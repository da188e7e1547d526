use std::path::{Path, PathBuf};
use testscope_api::{ARCHIVE_SEPARATOR, FileResolver, Location};

/// Resolves paths against the local filesystem.
///
/// A path containing `!/` addresses an entry inside an archive; it resolves
/// when the archive file exists. Entries are not looked up inside the archive.
pub struct LocalFileResolver {
    canonicalize: bool,
}

impl LocalFileResolver {
    pub fn new() -> Self {
        Self { canonicalize: true }
    }

    pub fn with_canonicalize(canonicalize: bool) -> Self {
        Self { canonicalize }
    }

    /// Standardizes a path to ensure consistency across symlinks.
    fn normalize_path(&self, path: &Path) -> PathBuf {
        if self.canonicalize {
            path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for LocalFileResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FileResolver for LocalFileResolver {
    fn find(&self, path: &Path) -> Option<Location> {
        let raw = path.to_string_lossy();
        if let Some((archive, entry)) = raw.split_once(ARCHIVE_SEPARATOR) {
            let archive = Path::new(archive);
            if !archive.is_file() {
                return None;
            }
            return Some(Location::archive_entry(
                self.normalize_path(archive),
                entry.trim_end_matches('/'),
            ));
        }

        if !path.exists() {
            return None;
        }
        Some(Location::file(self.normalize_path(path)))
    }
}
