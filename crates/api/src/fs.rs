use crate::models::Location;
use std::path::Path;

/// Maps paths to live locations.
pub trait FileResolver {
    /// Resolve `path`, which may point inside an archive (`lib.jar!/org`).
    /// Returns `None` when nothing exists there.
    fn find(&self, path: &Path) -> Option<Location>;
}
