#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use testscope_api::{
    BuildModel, ContentRoot, ModuleDependency, ModuleId, ModuleRoots, ProjectId, ProjectModel,
};

/// A project laid out in a temporary directory.
pub struct Fixture {
    _temp: TempDir,
    pub root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        Self { _temp: temp, root }
    }

    /// Path under the root, not created.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn file(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"PK").unwrap();
        path
    }

    /// Creates `rel` as an archive and returns its root class path (`rel!/`).
    pub fn jar(&self, rel: &str) -> PathBuf {
        let path = self.file(rel);
        PathBuf::from(format!("{}!/", path.display()))
    }
}

struct FakeModule {
    id: ModuleId,
    gradle_path: String,
    roots: ModuleRoots,
    model: Option<Arc<BuildModel>>,
}

/// In-memory [`ProjectModel`].
pub struct FakeProject {
    id: ProjectId,
    modules: Vec<FakeModule>,
    libraries: HashMap<String, Vec<PathBuf>>,
    library_lookups: Arc<AtomicUsize>,
}

impl FakeProject {
    pub fn new(name: &str) -> Self {
        Self {
            id: ProjectId::new(name),
            modules: Vec::new(),
            libraries: HashMap::new(),
            library_lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn module_id(&self, name: &str) -> ModuleId {
        ModuleId::new(self.id.clone(), name)
    }

    /// Counts calls to [`ProjectModel::library_classes`].
    pub fn library_lookups(&self) -> Arc<AtomicUsize> {
        self.library_lookups.clone()
    }

    pub fn with_library(mut self, name: &str, classes: Vec<PathBuf>) -> Self {
        self.libraries.insert(name.to_string(), classes);
        self
    }

    pub fn with_module(
        mut self,
        name: &str,
        source_folders: Vec<PathBuf>,
        compiler_output: Option<PathBuf>,
        model: Option<BuildModel>,
    ) -> Self {
        let content_root = source_folders
            .first()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.modules.push(FakeModule {
            id: self.module_id(name),
            gradle_path: format!(":{}", name),
            roots: ModuleRoots {
                content_roots: vec![ContentRoot {
                    path: content_root,
                    source_folders,
                }],
                compiler_output,
            },
            model: model.map(Arc::new),
        });
        self
    }

    pub fn into_arc(self) -> Arc<dyn ProjectModel> {
        Arc::new(self)
    }
}

impl ProjectModel for FakeProject {
    fn id(&self) -> &ProjectId {
        &self.id
    }

    fn modules(&self) -> Vec<ModuleId> {
        self.modules.iter().map(|m| m.id.clone()).collect()
    }

    fn build_model(&self, module: &ModuleId) -> Option<Arc<BuildModel>> {
        self.modules
            .iter()
            .find(|m| &m.id == module)
            .and_then(|m| m.model.clone())
    }

    fn module_roots(&self, module: &ModuleId) -> Option<ModuleRoots> {
        self.modules
            .iter()
            .find(|m| &m.id == module)
            .map(|m| m.roots.clone())
    }

    fn find_module(&self, dependency: &ModuleDependency) -> Option<ModuleId> {
        self.modules
            .iter()
            .find(|m| m.gradle_path == dependency.project_path)
            .map(|m| m.id.clone())
    }

    fn library_classes(&self, name: &str) -> Option<Vec<PathBuf>> {
        self.library_lookups.fetch_add(1, Ordering::Relaxed);
        self.libraries.get(name).cloned()
    }
}
