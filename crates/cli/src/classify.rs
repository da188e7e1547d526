use crate::view::{ClassificationView, yes_no};
use std::io;
use std::path::Path;
use tabled::Table;
use testscope_api::{FileResolver, Location, TestVariant};
use testscope_core::{LocalFileResolver, ScopeConfig};

pub fn run(
    snapshot: &Path,
    config: ScopeConfig,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = LocalFileResolver::with_canonicalize(config.canonicalize_paths);
    let session = testscope_runtime::open_session(snapshot, config)?;

    let location = locate(&resolver, path)?;

    let rows: Vec<ClassificationView> = session
        .all_scopes()
        .map(|scopes| ClassificationView {
            module: scopes.module().name().to_string(),
            android_test_source: yes_no(scopes.is_android_test_source(&location)),
            unit_test_source: yes_no(scopes.is_unit_test_source(&location)),
            android_test_excluded: yes_no(scopes.is_excluded(TestVariant::AndroidTest, &location)),
            unit_test_excluded: yes_no(scopes.is_excluded(TestVariant::UnitTest, &location)),
        })
        .collect();

    println!("{}", location);
    if rows.is_empty() {
        println!("No Android modules in {}.", snapshot.display());
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}

/// Absolute location of `path`. Paths that do not exist yet are still
/// classified by where they would live.
fn locate(resolver: &impl FileResolver, path: &Path) -> io::Result<Location> {
    let path = std::path::absolute(path)?;
    Ok(resolver
        .find(&path)
        .unwrap_or_else(|| Location::file(path)))
}
