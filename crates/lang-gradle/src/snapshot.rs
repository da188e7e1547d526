//! [`ProjectModel`] backed by a sync snapshot.

use crate::discoverer::{GradleCacheDiscoverer, MavenCoordinates};
use crate::language_level::{LanguageLevel, parse_from_gradle_string};
use crate::model::{GradleModule, LibraryEntry, SyncSnapshot};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use testscope_api::{
    ARCHIVE_SEPARATOR, BuildModel, ContentRoot, ModuleDependency, ModuleId, ModuleRoots,
    ProjectId, ProjectModel,
};
use testscope_core::ScopeConfig;
use testscope_core::error::{Result, TestScopeError};
use tracing::{debug, warn};

struct LoadedModule {
    id: ModuleId,
    gradle_path: String,
    roots: ModuleRoots,
    model: Option<Arc<BuildModel>>,
    language_level: Option<LanguageLevel>,
}

struct LoadedLibrary {
    coordinates: Option<MavenCoordinates>,
    classes: Vec<PathBuf>,
}

/// A Gradle project as captured by a sync snapshot. All paths are absolute.
pub struct GradleProject {
    id: ProjectId,
    root: PathBuf,
    modules: Vec<LoadedModule>,
    libraries: BTreeMap<String, LoadedLibrary>,
    gradle_cache: Option<GradleCacheDiscoverer>,
    config: ScopeConfig,
}

impl GradleProject {
    pub fn load(path: &Path, config: &ScopeConfig) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TestScopeError::Snapshot(format!("cannot read {}: {}", path.display(), e))
        })?;
        let snapshot: SyncSnapshot = serde_json::from_str(&content)
            .map_err(|e| TestScopeError::Snapshot(format!("{}: {}", path.display(), e)))?;

        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let base = std::path::absolute(&base)?;
        Self::from_snapshot(snapshot, &base, config)
    }

    pub fn from_snapshot(snapshot: SyncSnapshot, base: &Path, config: &ScopeConfig) -> Result<Self> {
        if snapshot.project.trim().is_empty() {
            return Err(TestScopeError::Snapshot("project name is empty".to_string()));
        }

        let root = match &snapshot.root {
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        };

        let gradle_cache = if config.gradle_cache.enabled {
            Some(match &config.gradle_cache.path {
                Some(path) => GradleCacheDiscoverer::with_path(path.clone()),
                None => GradleCacheDiscoverer::new(),
            })
        } else {
            None
        };

        let mut project = Self {
            id: ProjectId::new(snapshot.project.trim()),
            root,
            modules: Vec::with_capacity(snapshot.modules.len()),
            libraries: BTreeMap::new(),
            gradle_cache,
            config: config.clone(),
        };

        for (name, entry) in snapshot.libraries {
            let library = project.load_library(&name, entry);
            project.libraries.insert(name, library);
        }

        let mut seen = HashSet::new();
        for module in snapshot.modules {
            if !seen.insert(module.name.clone()) {
                return Err(TestScopeError::Snapshot(format!(
                    "duplicate module name: {}",
                    module.name
                )));
            }
            let loaded = project.load_module(module);
            project.modules.push(loaded);
        }

        debug!(
            project = %project.id,
            modules = project.modules.len(),
            libraries = project.libraries.len(),
            "Loaded sync snapshot"
        );
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Module id by module name.
    pub fn module(&self, name: &str) -> Option<ModuleId> {
        self.modules
            .iter()
            .find(|m| m.id.name() == name)
            .map(|m| m.id.clone())
    }

    /// Language level parsed from the module's `source_compatibility`.
    pub fn language_level(&self, module: &ModuleId) -> Option<LanguageLevel> {
        self.find(module).and_then(|m| m.language_level)
    }

    fn find(&self, module: &ModuleId) -> Option<&LoadedModule> {
        self.modules.iter().find(|m| &m.id == module)
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Library class roots point inside archives, the way a library table stores them.
    fn class_root(&self, path: &Path) -> PathBuf {
        let path = self.absolute(path);
        if !path.to_string_lossy().contains(ARCHIVE_SEPARATOR) && self.config.is_archive(&path) {
            PathBuf::from(format!("{}{}", path.display(), ARCHIVE_SEPARATOR))
        } else {
            path
        }
    }

    fn load_library(&self, name: &str, entry: LibraryEntry) -> LoadedLibrary {
        let coordinates = entry
            .coordinates
            .as_deref()
            .or(Some(name))
            .and_then(|c| c.parse::<MavenCoordinates>().ok());
        LoadedLibrary {
            coordinates,
            classes: entry.classes.iter().map(|p| self.class_root(p)).collect(),
        }
    }

    fn load_module(&self, module: GradleModule) -> LoadedModule {
        let gradle_path = module.gradle_path();
        let id = ModuleId::new(self.id.clone(), &module.name);

        let content_roots = module
            .content_roots
            .into_iter()
            .map(|root| ContentRoot {
                path: self.absolute(&root.path),
                source_folders: root
                    .source_folders
                    .iter()
                    .map(|p| self.absolute(p))
                    .collect(),
            })
            .collect();
        let roots = ModuleRoots {
            content_roots,
            compiler_output: module.compiler_output.as_deref().map(|p| self.absolute(p)),
        };

        let model = module.android.map(|mut model| {
            self.rebase_build_model(&mut model);
            model
        });

        let language_level = model
            .as_ref()
            .and_then(|m| m.source_compatibility.as_deref())
            .and_then(|raw| {
                let level = parse_from_gradle_string(raw);
                if level.is_none() {
                    warn!(module = %id, "Unrecognized source compatibility: {}", raw);
                }
                level
            });

        LoadedModule {
            id,
            gradle_path,
            roots,
            model: model.map(Arc::new),
            language_level,
        }
    }

    fn rebase_build_model(&self, model: &mut BuildModel) {
        for provider in model
            .android_test_sources
            .iter_mut()
            .chain(model.unit_test_sources.iter_mut())
        {
            for path in provider.all_paths_mut() {
                *path = self.absolute(path);
            }
        }
        for artifact in model
            .android_test_artifact
            .iter_mut()
            .chain(model.unit_test_artifact.iter_mut())
        {
            if let Some(folder) = &artifact.classes_folder {
                artifact.classes_folder = Some(self.absolute(folder));
            }
        }
    }

    fn cached_classes(&self, coordinates: &MavenCoordinates) -> Vec<PathBuf> {
        let Some(cache) = &self.gradle_cache else {
            return Vec::new();
        };
        cache
            .find_jars(coordinates)
            .iter()
            .map(|jar| self.class_root(jar))
            .collect()
    }
}

impl ProjectModel for GradleProject {
    fn id(&self) -> &ProjectId {
        &self.id
    }

    fn modules(&self) -> Vec<ModuleId> {
        self.modules.iter().map(|m| m.id.clone()).collect()
    }

    fn build_model(&self, module: &ModuleId) -> Option<Arc<BuildModel>> {
        self.find(module).and_then(|m| m.model.clone())
    }

    fn module_roots(&self, module: &ModuleId) -> Option<ModuleRoots> {
        self.find(module).map(|m| m.roots.clone())
    }

    fn find_module(&self, dependency: &ModuleDependency) -> Option<ModuleId> {
        let path = dependency.project_path.as_str();
        self.modules
            .iter()
            .find(|m| m.gradle_path == path)
            .or_else(|| {
                self.modules
                    .iter()
                    .find(|m| m.id.name() == path.trim_start_matches(':'))
            })
            .map(|m| m.id.clone())
    }

    fn library_classes(&self, name: &str) -> Option<Vec<PathBuf>> {
        match self.libraries.get(name) {
            Some(library) if !library.classes.is_empty() => Some(library.classes.clone()),
            Some(library) => Some(
                library
                    .coordinates
                    .as_ref()
                    .map(|c| self.cached_classes(c))
                    .unwrap_or_default(),
            ),
            None => {
                let coordinates = name.parse::<MavenCoordinates>().ok()?;
                let classes = self.cached_classes(&coordinates);
                if classes.is_empty() {
                    None
                } else {
                    debug!("Resolved {} from the Gradle cache", coordinates);
                    Some(classes)
                }
            }
        }
    }
}
