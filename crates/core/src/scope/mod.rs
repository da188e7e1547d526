//! Search scopes for the test artifacts of Android modules.

mod artifact;
pub mod exclusion;

pub use artifact::TestArtifactScopes;
pub use exclusion::{DependencySet, ExclusionPlan, foreign_dependencies, plan_exclusion};

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use testscope_api::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Source,
    Exclude,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Source => f.write_str("source"),
            ScopeKind::Exclude => f.write_str("exclude"),
        }
    }
}

/// A scope made of root locations; a location is in scope when it lies
/// under one of the roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileRootScope {
    roots: BTreeSet<Location>,
}

impl FileRootScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, root: Location) -> bool {
        self.roots.insert(root)
    }

    pub fn roots(&self) -> impl Iterator<Item = &Location> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn contains_root(&self, root: &Location) -> bool {
        self.roots.contains(root)
    }

    pub fn accept(&self, location: &Location) -> bool {
        self.roots.iter().any(|root| root.contains(location))
    }

    /// Plain path-prefix filter: archive roots match through their archive file.
    pub fn accepts_path(&self, path: &Path) -> bool {
        self.roots.iter().any(|root| path.starts_with(root.io_path()))
    }

    pub fn unite_with(&self, other: &FileRootScope) -> FileRootScope {
        FileRootScope {
            roots: self.roots.union(&other.roots).cloned().collect(),
        }
    }

    /// Roots of `self` that neither lie under nor contain a root of `other`.
    pub fn without_overlapping(&self, other: &FileRootScope) -> FileRootScope {
        self.roots
            .iter()
            .filter(|root| {
                !other
                    .roots
                    .iter()
                    .any(|theirs| theirs.contains(root) || root.contains(theirs))
            })
            .cloned()
            .collect()
    }

    /// True when no root of `self` is a root of `other`.
    pub fn is_disjoint(&self, other: &FileRootScope) -> bool {
        self.roots.is_disjoint(&other.roots)
    }
}

impl FromIterator<Location> for FileRootScope {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

impl Extend<Location> for FileRootScope {
    fn extend<I: IntoIterator<Item = Location>>(&mut self, iter: I) {
        self.roots.extend(iter);
    }
}
