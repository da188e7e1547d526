//! Build-model data as delivered by a Gradle sync.
//!
//! These types mirror the subset of the Android Gradle model the scope
//! resolver reads: test source providers and the test artifacts of the
//! selected build variant.

use super::variant::TestVariant;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One source set (`main`, `test`, `androidTestDebug`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SourceProvider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub java_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aidl_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub renderscript_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub c_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cpp_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub res_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jni_libs_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shaders_dirs: Vec<PathBuf>,
}

impl SourceProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Every source directory of the provider, in declaration order. The
    /// manifest is a file, not a folder, and is not included.
    pub fn all_source_folders(&self) -> impl Iterator<Item = &Path> {
        self.java_dirs
            .iter()
            .chain(&self.resources_dirs)
            .chain(&self.aidl_dirs)
            .chain(&self.renderscript_dirs)
            .chain(&self.c_dirs)
            .chain(&self.cpp_dirs)
            .chain(&self.res_dirs)
            .chain(&self.assets_dirs)
            .chain(&self.jni_libs_dirs)
            .chain(&self.shaders_dirs)
            .map(PathBuf::as_path)
    }

    /// Every path of the provider, manifest included.
    pub fn all_paths_mut(&mut self) -> impl Iterator<Item = &mut PathBuf> {
        self.manifest_file
            .iter_mut()
            .chain(&mut self.java_dirs)
            .chain(&mut self.resources_dirs)
            .chain(&mut self.aidl_dirs)
            .chain(&mut self.renderscript_dirs)
            .chain(&mut self.c_dirs)
            .chain(&mut self.cpp_dirs)
            .chain(&mut self.res_dirs)
            .chain(&mut self.assets_dirs)
            .chain(&mut self.jni_libs_dirs)
            .chain(&mut self.shaders_dirs)
    }
}

/// A library the artifact depends on, looked up by name in the project library table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LibraryDependency {
    pub name: String,
    /// Libraries pulled in by this one (AAR libraries carry their own).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<LibraryDependency>,
}

impl LibraryDependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
        }
    }
}

/// A dependency on another module of the same project, by Gradle path (`:lib`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(transparent)]
pub struct ModuleDependency {
    pub project_path: String,
}

impl ModuleDependency {
    pub fn new(project_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Dependencies {
    #[serde(default)]
    pub libraries: Vec<LibraryDependency>,
    #[serde(default)]
    pub modules: Vec<ModuleDependency>,
}

/// A test artifact of the selected build variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Artifact {
    pub name: String,
    /// Where the compiler writes this artifact's classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes_folder: Option<PathBuf>,
    #[serde(default)]
    pub dependencies: Dependencies,
}

impl Artifact {
    pub fn new(variant: TestVariant) -> Self {
        Self {
            name: variant.artifact_name().to_string(),
            classes_folder: None,
            dependencies: Dependencies::default(),
        }
    }
}

fn default_variant() -> String {
    "debug".to_string()
}

/// The Android build model of one module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BuildModel {
    #[serde(default = "default_variant")]
    pub selected_variant: String,
    /// `compileOptions.sourceCompatibility` as written in the build file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_compatibility: Option<String>,
    #[serde(default)]
    pub android_test_sources: Vec<SourceProvider>,
    #[serde(default)]
    pub unit_test_sources: Vec<SourceProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_test_artifact: Option<Artifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_test_artifact: Option<Artifact>,
}

impl Default for BuildModel {
    fn default() -> Self {
        Self {
            selected_variant: default_variant(),
            source_compatibility: None,
            android_test_sources: Vec::new(),
            unit_test_sources: Vec::new(),
            android_test_artifact: None,
            unit_test_artifact: None,
        }
    }
}

impl BuildModel {
    pub fn test_source_providers(&self, variant: TestVariant) -> &[SourceProvider] {
        match variant {
            TestVariant::AndroidTest => &self.android_test_sources,
            TestVariant::UnitTest => &self.unit_test_sources,
        }
    }

    pub fn test_artifact(&self, variant: TestVariant) -> Option<&Artifact> {
        match variant {
            TestVariant::AndroidTest => self.android_test_artifact.as_ref(),
            TestVariant::UnitTest => self.unit_test_artifact.as_ref(),
        }
    }
}

/// A content root of a module together with the source folders registered under it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentRoot {
    pub path: PathBuf,
    #[serde(default)]
    pub source_folders: Vec<PathBuf>,
}

/// Module root layout as registered with the host, independent of any build model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRoots {
    pub content_roots: Vec<ContentRoot>,
    pub compiler_output: Option<PathBuf>,
}
