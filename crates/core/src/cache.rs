//! Per-module cache of test artifact scopes.
//!
//! Entries are created only by [`ScopeCache::resync_project`], which the
//! caller runs after every build-model sync. There is no change detection.

use crate::scope::TestArtifactScopes;
use std::collections::BTreeMap;
use std::sync::Arc;
use testscope_api::{FileResolver, ModuleId, ProjectId, ProjectModel};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResyncSummary {
    /// Entries dropped for the project.
    pub removed: usize,
    /// Entries created, one per module with a build model.
    pub created: usize,
    /// Modules of the project without a build model.
    pub skipped: usize,
}

pub struct ScopeCache {
    files: Arc<dyn FileResolver>,
    entries: BTreeMap<ModuleId, TestArtifactScopes>,
}

impl ScopeCache {
    pub fn new(files: Arc<dyn FileResolver>) -> Self {
        Self {
            files,
            entries: BTreeMap::new(),
        }
    }

    /// Scopes of `module`, or `None` for modules without a build model or
    /// not yet synced. Never computes anything.
    pub fn get(&self, module: &ModuleId) -> Option<&TestArtifactScopes> {
        self.entries.get(module)
    }

    /// Drop every entry of `project` and create fresh ones for its modules
    /// that have a build model.
    pub fn resync_project(&mut self, project: Arc<dyn ProjectModel>) -> ResyncSummary {
        let project_id = project.id().clone();
        let before = self.entries.len();
        self.entries
            .retain(|module, _| module.project() != &project_id);

        let mut summary = ResyncSummary {
            removed: before - self.entries.len(),
            ..Default::default()
        };

        for module in project.modules() {
            match project.build_model(&module) {
                Some(model) => {
                    let scopes = TestArtifactScopes::new(
                        module.clone(),
                        model,
                        project.clone(),
                        self.files.clone(),
                    );
                    self.entries.insert(module, scopes);
                    summary.created += 1;
                }
                None => summary.skipped += 1,
            }
        }

        info!(
            project = %project_id,
            removed = summary.removed,
            created = summary.created,
            skipped = summary.skipped,
            "Resynced test artifact scopes"
        );
        summary
    }

    /// Entries of `project`, ordered by module.
    pub fn entries_for<'a>(
        &'a self,
        project: &'a ProjectId,
    ) -> impl Iterator<Item = &'a TestArtifactScopes> + 'a {
        self.entries
            .iter()
            .filter(move |(module, _)| module.project() == project)
            .map(|(_, scopes)| scopes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
