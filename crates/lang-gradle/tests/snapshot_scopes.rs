//! Loading sync snapshots and resolving scopes from them.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use testscope_api::{Location, ModuleDependency, ProjectModel, TestVariant};
use testscope_core::config::GradleCacheConfig;
use testscope_core::error::TestScopeError;
use testscope_core::{LocalFileResolver, ScopeCache, ScopeConfig};
use testscope_gradle::{GradleProject, LanguageLevel};

struct Workspace {
    _temp: TempDir,
    root: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        Self { _temp: temp, root }
    }

    fn dirs(&self, rels: &[&str]) {
        for rel in rels {
            fs::create_dir_all(self.root.join(rel)).unwrap();
        }
    }

    fn files(&self, rels: &[&str]) {
        for rel in rels {
            let path = self.root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"PK").unwrap();
        }
    }

    fn write_snapshot(&self, value: serde_json::Value) -> PathBuf {
        let path = self.root.join("snapshot.json");
        fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
        path
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

fn offline_config() -> ScopeConfig {
    ScopeConfig {
        gradle_cache: GradleCacheConfig {
            enabled: false,
            path: None,
        },
        ..Default::default()
    }
}

fn app_snapshot() -> serde_json::Value {
    json!({
        "project": "demo",
        "libraries": {
            "junit-4.12": { "coordinates": "junit:junit:4.12", "classes": ["libs/junit-4.12.jar"] },
            "espresso-core-2.2.2": { "classes": ["libs/espresso-core-2.2.2.jar!/"] }
        },
        "modules": [
            {
                "name": "app",
                "content_roots": [ { "path": "app", "source_folders": ["app/src/main/java"] } ],
                "compiler_output": "app/build/classes",
                "android": {
                    "source_compatibility": "JavaVersion.VERSION_1_7",
                    "android_test_sources": [ { "name": "androidTest", "java_dirs": ["app/src/androidTest/java"] } ],
                    "unit_test_sources": [ { "name": "test", "java_dirs": ["app/src/test/java"] } ],
                    "android_test_artifact": {
                        "name": "_android_test_",
                        "dependencies": { "libraries": [ { "name": "espresso-core-2.2.2" } ] }
                    },
                    "unit_test_artifact": {
                        "name": "_unit_test_",
                        "dependencies": { "libraries": [ { "name": "junit-4.12" } ] }
                    }
                }
            },
            { "name": "java-lib", "gradle_path": ":libs:java-lib" }
        ]
    })
}

fn prepare_app(ws: &Workspace) -> PathBuf {
    ws.dirs(&[
        "app/src/main/java",
        "app/src/androidTest/java",
        "app/src/test/java",
    ]);
    ws.files(&["libs/junit-4.12.jar", "libs/espresso-core-2.2.2.jar"]);
    ws.write_snapshot(app_snapshot())
}

fn resolve(project: GradleProject) -> (ScopeCache, Arc<GradleProject>) {
    let project = Arc::new(project);
    let mut cache = ScopeCache::new(Arc::new(LocalFileResolver::new()));
    cache.resync_project(project.clone());
    (cache, project)
}

fn jar(path: &Path) -> (Location, Location) {
    (Location::archive_root(path), Location::file(path))
}

#[test]
fn test_junit_and_espresso_are_foreign_to_each_other() {
    let ws = Workspace::new();
    let snapshot = prepare_app(&ws);
    let (cache, project) = resolve(GradleProject::load(&snapshot, &offline_config()).unwrap());
    let scopes = cache.get(&project.module("app").unwrap()).unwrap();

    let (junit_root, junit_file) = jar(&ws.path("libs/junit-4.12.jar"));
    let (espresso_root, espresso_file) = jar(&ws.path("libs/espresso-core-2.2.2.jar"));

    let android_exclude = scopes.exclude_scope(TestVariant::AndroidTest);
    assert!(android_exclude.contains_root(&junit_root));
    assert!(android_exclude.contains_root(&junit_file));
    assert!(!android_exclude.contains_root(&espresso_root));
    assert!(android_exclude.contains_root(&Location::file(ws.path("app/src/test/java"))));

    let unit_exclude = scopes.exclude_scope(TestVariant::UnitTest);
    assert!(unit_exclude.contains_root(&espresso_root));
    assert!(unit_exclude.contains_root(&espresso_file));
    assert!(!unit_exclude.contains_root(&junit_root));
}

#[test]
fn test_plain_module_has_no_entry() {
    let ws = Workspace::new();
    let snapshot = prepare_app(&ws);
    let (cache, project) = resolve(GradleProject::load(&snapshot, &offline_config()).unwrap());

    assert!(cache.get(&project.module("java-lib").unwrap()).is_none());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_paths_are_rebased_on_snapshot_directory() {
    let ws = Workspace::new();
    let snapshot = prepare_app(&ws);
    let project = GradleProject::load(&snapshot, &offline_config()).unwrap();
    let app = project.module("app").unwrap();

    let roots = project.module_roots(&app).unwrap();
    assert_eq!(roots.compiler_output, Some(ws.path("app/build/classes")));
    assert_eq!(
        roots.content_roots[0].source_folders,
        vec![ws.path("app/src/main/java")]
    );

    let junit = project.library_classes("junit-4.12").unwrap();
    assert_eq!(
        junit,
        vec![PathBuf::from(format!(
            "{}!/",
            ws.path("libs/junit-4.12.jar").display()
        ))]
    );
    assert!(project.library_classes("guava").is_none());
}

#[test]
fn test_language_level_is_parsed() {
    let ws = Workspace::new();
    let snapshot = prepare_app(&ws);
    let project = GradleProject::load(&snapshot, &offline_config()).unwrap();

    let app = project.module("app").unwrap();
    let lib = project.module("java-lib").unwrap();
    assert_eq!(project.language_level(&app), Some(LanguageLevel::Jdk1_7));
    assert_eq!(project.language_level(&lib), None);
}

#[test]
fn test_module_dependencies_resolve_by_gradle_path_or_name() {
    let ws = Workspace::new();
    let snapshot = prepare_app(&ws);
    let project = GradleProject::load(&snapshot, &offline_config()).unwrap();
    let lib = project.module("java-lib").unwrap();

    assert_eq!(project.find_module(&ModuleDependency::new(":libs:java-lib")), Some(lib.clone()));
    assert_eq!(project.find_module(&ModuleDependency::new(":java-lib")), Some(lib));
    assert_eq!(project.find_module(&ModuleDependency::new(":app")), project.module("app"));
    assert_eq!(project.find_module(&ModuleDependency::new(":nope")), None);
}

#[test]
fn test_duplicate_module_is_rejected() {
    let ws = Workspace::new();
    let snapshot = ws.write_snapshot(json!({
        "project": "demo",
        "modules": [ { "name": "app" }, { "name": "app" } ]
    }));

    let err = GradleProject::load(&snapshot, &offline_config()).err().unwrap();
    assert!(matches!(err, TestScopeError::Snapshot(ref msg) if msg.contains("duplicate")));
}

#[test]
fn test_unknown_field_is_rejected() {
    let ws = Workspace::new();
    let snapshot = ws.write_snapshot(json!({ "project": "demo", "flavors": [] }));

    assert!(matches!(
        GradleProject::load(&snapshot, &offline_config()),
        Err(TestScopeError::Snapshot(_))
    ));
}

#[test]
fn test_missing_snapshot_is_reported() {
    let ws = Workspace::new();
    assert!(GradleProject::load(&ws.path("nope.json"), &offline_config()).is_err());
}

#[test]
fn test_library_falls_back_to_gradle_cache() {
    let ws = Workspace::new();
    let cache_dir = ws.path("gradle-cache");
    ws.files(&["gradle-cache/org.robolectric/robolectric/3.0/abc/robolectric-3.0.jar"]);
    ws.dirs(&["app/src/test/java"]);
    let snapshot = ws.write_snapshot(json!({
        "project": "demo",
        "libraries": { "robolectric": { "coordinates": "org.robolectric:robolectric:3.0" } },
        "modules": [ {
            "name": "app",
            "android": {
                "android_test_artifact": { "name": "_android_test_" },
                "unit_test_artifact": {
                    "name": "_unit_test_",
                    "dependencies": { "libraries": [
                        { "name": "robolectric" },
                        { "name": "org.mockito:mockito-core:1.10.19" }
                    ] }
                }
            }
        } ]
    }));
    ws.files(&["gradle-cache/org.mockito/mockito-core/1.10.19/def/mockito-core-1.10.19.jar"]);

    let config = ScopeConfig {
        gradle_cache: GradleCacheConfig {
            enabled: true,
            path: Some(cache_dir.clone()),
        },
        ..Default::default()
    };
    let (cache, project) = resolve(GradleProject::load(&snapshot, &config).unwrap());
    let exclude = cache
        .get(&project.module("app").unwrap())
        .unwrap()
        .android_test_exclude_scope();

    let robolectric = cache_dir.join("org.robolectric/robolectric/3.0/abc/robolectric-3.0.jar");
    let mockito = cache_dir.join("org.mockito/mockito-core/1.10.19/def/mockito-core-1.10.19.jar");
    assert!(exclude.contains_root(&Location::archive_root(&robolectric)));
    assert!(exclude.contains_root(&Location::file(&robolectric)));
    assert!(exclude.contains_root(&Location::archive_root(&mockito)));
}
