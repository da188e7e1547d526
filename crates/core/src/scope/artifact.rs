use super::FileRootScope;
use super::exclusion::{DependencySet, plan_exclusion};
use once_cell::unsync::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use testscope_api::{
    Artifact, BuildModel, FileResolver, LibraryDependency, Location, ModuleId, PerVariant,
    ProjectId, ProjectModel, TestVariant,
};
use tracing::{debug, trace};

/// Search scopes of the two test artifacts of one module:
///
/// * the sources of the android test artifact,
/// * the sources of the unit test artifact,
/// * what is excluded for android test sources (unit test sources, libraries and modules),
/// * what is excluded for unit test sources.
///
/// Each scope is computed on first access and kept for the lifetime of the entry.
pub struct TestArtifactScopes {
    module: ModuleId,
    model: Arc<BuildModel>,
    project: Arc<dyn ProjectModel>,
    files: Arc<dyn FileResolver>,
    source_scopes: PerVariant<OnceCell<FileRootScope>>,
    exclude_scopes: PerVariant<OnceCell<FileRootScope>>,
    /// Class roots of every library either artifact references, by name.
    library_roots: OnceCell<BTreeMap<String, Vec<PathBuf>>>,
}

impl TestArtifactScopes {
    pub fn new(
        module: ModuleId,
        model: Arc<BuildModel>,
        project: Arc<dyn ProjectModel>,
        files: Arc<dyn FileResolver>,
    ) -> Self {
        Self {
            module,
            model,
            project,
            files,
            source_scopes: PerVariant::default(),
            exclude_scopes: PerVariant::default(),
            library_roots: OnceCell::new(),
        }
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    pub fn project(&self) -> &ProjectId {
        self.module.project()
    }

    pub fn build_model(&self) -> &BuildModel {
        &self.model
    }

    pub fn source_scope(&self, variant: TestVariant) -> &FileRootScope {
        self.source_scopes
            .get(variant)
            .get_or_init(|| self.compute_source_scope(variant))
    }

    pub fn exclude_scope(&self, variant: TestVariant) -> &FileRootScope {
        self.exclude_scopes
            .get(variant)
            .get_or_init(|| self.compute_exclude_scope(variant))
    }

    pub fn android_test_source_scope(&self) -> &FileRootScope {
        self.source_scope(TestVariant::AndroidTest)
    }

    pub fn unit_test_source_scope(&self) -> &FileRootScope {
        self.source_scope(TestVariant::UnitTest)
    }

    pub fn android_test_exclude_scope(&self) -> &FileRootScope {
        self.exclude_scope(TestVariant::AndroidTest)
    }

    pub fn unit_test_exclude_scope(&self) -> &FileRootScope {
        self.exclude_scope(TestVariant::UnitTest)
    }

    pub fn is_android_test_source(&self, location: &Location) -> bool {
        self.android_test_source_scope().accept(location)
    }

    pub fn is_unit_test_source(&self, location: &Location) -> bool {
        self.unit_test_source_scope().accept(location)
    }

    /// Whether `location` is foreign to `variant`.
    pub fn is_excluded(&self, variant: TestVariant, location: &Location) -> bool {
        self.exclude_scope(variant).accept(location)
    }

    fn find(&self, path: &Path) -> Option<Location> {
        let found = self.files.find(path);
        if found.is_none() {
            // Folders the user has not created yet stay out of the scope.
            trace!("Skipping missing path {}", path.display());
        }
        found
    }

    fn compute_source_scope(&self, variant: TestVariant) -> FileRootScope {
        // TODO consider generated source folders once the model exposes them
        let folders: BTreeSet<PathBuf> = self
            .model
            .test_source_providers(variant)
            .iter()
            .flat_map(|provider| provider.all_source_folders())
            .map(Path::to_path_buf)
            .collect();

        let scope: FileRootScope = folders.iter().filter_map(|f| self.find(f)).collect();
        debug!(
            module = %self.module,
            %variant,
            roots = scope.len(),
            "Computed test source scope"
        );
        scope
    }

    fn compute_exclude_scope(&self, variant: TestVariant) -> FileRootScope {
        // Folders registered for both artifacts stay visible to both.
        let excluded_source = self
            .source_scope(variant.other())
            .without_overlapping(self.source_scope(variant));
        let excluded_dependencies = self.compute_excluded_dependencies_scope(variant);
        let scope = excluded_source.unite_with(&excluded_dependencies);
        debug!(
            module = %self.module,
            %variant,
            roots = scope.len(),
            "Computed test exclude scope"
        );
        scope
    }

    fn compute_excluded_dependencies_scope(&self, variant: TestVariant) -> FileRootScope {
        let other = variant.other();
        let mut roots = FileRootScope::new();

        if let Some(classes) = self
            .model
            .test_artifact(other)
            .and_then(|artifact| artifact.classes_folder.as_deref())
        {
            roots.extend(self.find(classes));
        }

        let wanted = self.collect_dependencies(self.model.test_artifact(variant));
        let unwanted = self.collect_dependencies(self.model.test_artifact(other));
        let plan = plan_exclusion(&wanted, &unwanted);

        for library in &plan.libraries {
            let Some(paths) = self.library_roots().get(library) else {
                continue;
            };
            for path in paths {
                let Some(location) = self.find(path) else {
                    continue;
                };
                // The archive file itself, so path-prefix filters catch it too.
                if let Some(archive) = location.archive_file() {
                    roots.extend(self.find(archive));
                }
                roots.insert(location);
            }
        }

        for module in &plan.modules {
            let Some(module_roots) = self.project.module_roots(module) else {
                continue;
            };
            for content_root in &module_roots.content_roots {
                for folder in &content_root.source_folders {
                    roots.extend(self.find(folder));
                }
            }
            if let Some(output) = &module_roots.compiler_output {
                roots.extend(self.find(output));
            }
        }

        roots
    }

    /// Libraries known to the project, looked up once for both artifacts.
    fn library_roots(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        self.library_roots.get_or_init(|| {
            let mut pending: Vec<&LibraryDependency> = TestVariant::ALL
                .into_iter()
                .filter_map(|variant| self.model.test_artifact(variant))
                .flat_map(|artifact| &artifact.dependencies.libraries)
                .collect();
            let mut seen = BTreeSet::new();
            let mut roots = BTreeMap::new();
            while let Some(library) = pending.pop() {
                pending.extend(&library.dependencies);
                if !seen.insert(library.name.as_str()) {
                    continue;
                }
                match self.project.library_classes(&library.name) {
                    Some(classes) => {
                        roots.insert(library.name.clone(), classes);
                    }
                    None => trace!("Library {} is not in the project", library.name),
                }
            }
            roots
        })
    }

    /// Resolve an artifact's dependencies against the project. Libraries
    /// missing from the library table and modules that do not exist are dropped.
    fn collect_dependencies(&self, artifact: Option<&Artifact>) -> DependencySet {
        let mut set = DependencySet::new();
        let Some(artifact) = artifact else {
            return set;
        };

        let mut pending: Vec<&LibraryDependency> =
            artifact.dependencies.libraries.iter().collect();
        while let Some(library) = pending.pop() {
            if self.library_roots().contains_key(&library.name) {
                set.add_library(library.name.clone());
            }
            pending.extend(&library.dependencies);
        }

        for dependency in &artifact.dependencies.modules {
            if let Some(module) = self.project.find_module(dependency) {
                set.add_module(module);
            }
        }

        set
    }
}
