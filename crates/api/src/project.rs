use crate::models::{BuildModel, ModuleDependency, ModuleId, ModuleRoots, ProjectId};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the scope resolver needs to know about a synced project:
/// its modules, their build models and roots, and the project library table.
pub trait ProjectModel {
    fn id(&self) -> &ProjectId;

    /// All modules of the project, Android or not.
    fn modules(&self) -> Vec<ModuleId>;

    /// The Android build model of `module`, or `None` for plain modules.
    fn build_model(&self, module: &ModuleId) -> Option<Arc<BuildModel>>;

    /// Content roots and compiler output registered for `module`.
    fn module_roots(&self, module: &ModuleId) -> Option<ModuleRoots>;

    /// Resolve a module dependency against the project's modules.
    fn find_module(&self, dependency: &ModuleDependency) -> Option<ModuleId>;

    /// Class roots of a library in the project library table, or `None` if
    /// the table has no library of that name.
    fn library_classes(&self, name: &str) -> Option<Vec<PathBuf>>;
}
