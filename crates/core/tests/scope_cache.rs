//! Cache lifecycle: entries appear and disappear only through resyncs.

mod common;

use common::{FakeProject, Fixture};
use std::sync::Arc;
use testscope_api::{BuildModel, Location, SourceProvider, TestVariant};
use testscope_core::{LocalFileResolver, ScopeCache};

fn model_with_unit_tests(fx: &Fixture, module: &str) -> BuildModel {
    let mut unit_sources = SourceProvider::new("test");
    unit_sources
        .java_dirs
        .push(fx.dir(&format!("{}/src/test/java", module)));
    BuildModel {
        unit_test_sources: vec![unit_sources],
        ..Default::default()
    }
}

fn new_cache() -> ScopeCache {
    ScopeCache::new(Arc::new(LocalFileResolver::new()))
}

#[test]
fn test_get_before_resync_is_absent() {
    let fx = Fixture::new();
    let project = FakeProject::new("demo").with_module(
        "app",
        vec![],
        None,
        Some(model_with_unit_tests(&fx, "app")),
    );
    let cache = new_cache();

    assert!(cache.get(&project.module_id("app")).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_resync_populates_android_modules_only() {
    let fx = Fixture::new();
    let project = FakeProject::new("demo")
        .with_module("app", vec![], None, Some(model_with_unit_tests(&fx, "app")))
        .with_module("plain-java", vec![fx.dir("plain-java/src/main/java")], None, None);
    let app = project.module_id("app");
    let plain = project.module_id("plain-java");

    let mut cache = new_cache();
    let summary = cache.resync_project(project.into_arc());

    assert_eq!(summary.created, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.removed, 0);
    assert!(cache.get(&app).is_some());
    assert!(cache.get(&plain).is_none());
}

#[test]
fn test_resync_twice_yields_identical_scopes() {
    let fx = Fixture::new();
    let build = || {
        FakeProject::new("demo").with_module(
            "app",
            vec![],
            None,
            Some(model_with_unit_tests(&fx, "app")),
        )
    };
    let app = build().module_id("app");

    let mut cache = new_cache();
    cache.resync_project(build().into_arc());
    let first: Vec<Location> = cache
        .get(&app)
        .unwrap()
        .exclude_scope(TestVariant::AndroidTest)
        .roots()
        .cloned()
        .collect();

    let summary = cache.resync_project(build().into_arc());
    assert_eq!(summary.removed, 1);
    let second: Vec<Location> = cache
        .get(&app)
        .unwrap()
        .exclude_scope(TestVariant::AndroidTest)
        .roots()
        .cloned()
        .collect();

    assert_eq!(first, second);
    assert_eq!(first, vec![Location::file(fx.path("app/src/test/java"))]);
}

#[test]
fn test_resync_drops_modules_that_lost_their_model() {
    let fx = Fixture::new();
    let before = FakeProject::new("demo")
        .with_module("app", vec![], None, Some(model_with_unit_tests(&fx, "app")))
        .with_module("lib", vec![], None, Some(model_with_unit_tests(&fx, "lib")));
    let app = before.module_id("app");
    let lib = before.module_id("lib");

    let mut cache = new_cache();
    cache.resync_project(before.into_arc());
    assert_eq!(cache.len(), 2);

    let after = FakeProject::new("demo")
        .with_module("app", vec![], None, Some(model_with_unit_tests(&fx, "app")))
        .with_module("lib", vec![], None, None);
    cache.resync_project(after.into_arc());

    assert!(cache.get(&app).is_some());
    assert!(cache.get(&lib).is_none());
}

#[test]
fn test_resync_leaves_other_projects_alone() {
    let fx = Fixture::new();
    let first = FakeProject::new("first").with_module(
        "app",
        vec![],
        None,
        Some(model_with_unit_tests(&fx, "first-app")),
    );
    let second = FakeProject::new("second").with_module(
        "app",
        vec![],
        None,
        Some(model_with_unit_tests(&fx, "second-app")),
    );
    let first_app = first.module_id("app");
    let second_app = second.module_id("app");
    let second_id = second_app.project().clone();

    let mut cache = new_cache();
    cache.resync_project(first.into_arc());
    cache.resync_project(second.into_arc());
    assert_eq!(cache.len(), 2);

    let emptied = FakeProject::new("second");
    let summary = cache.resync_project(emptied.into_arc());

    assert_eq!(summary.removed, 1);
    assert!(cache.get(&first_app).is_some());
    assert!(cache.get(&second_app).is_none());
    assert_eq!(cache.entries_for(&second_id).count(), 0);
}
