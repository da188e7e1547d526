use crate::view::{ScopeRootView, display_location};
use serde_json::json;
use std::path::Path;
use tabled::Table;
use testscope_api::TestVariant;
use testscope_core::{ScopeConfig, ScopeKind, TestArtifactScopes};
use testscope_runtime::Session;

pub fn run(
    snapshot: &Path,
    config: ScopeConfig,
    module: Option<String>,
    variant: Option<TestVariant>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = testscope_runtime::open_session(snapshot, config)?;

    let entries: Vec<&TestArtifactScopes> = match module {
        Some(name) => {
            let id = session
                .project()
                .module(&name)
                .ok_or_else(|| format!("no module named '{}' in {}", name, snapshot.display()))?;
            match session.scopes(&id) {
                Some(scopes) => vec![scopes],
                None => {
                    println!("Module '{}' has no Android build model.", name);
                    return Ok(());
                }
            }
        }
        None => session.all_scopes().collect(),
    };

    let variants: Vec<TestVariant> = match variant {
        Some(v) => vec![v],
        None => TestVariant::ALL.to_vec(),
    };

    if json {
        print_json(&session, &entries, &variants)?;
    } else {
        print_table(&session, &entries, &variants);
    }
    Ok(())
}

fn print_table(session: &Session, entries: &[&TestArtifactScopes], variants: &[TestVariant]) {
    let root = session.project().root();
    let mut rows = Vec::new();

    for scopes in entries {
        for &variant in variants {
            for kind in [ScopeKind::Source, ScopeKind::Exclude] {
                let scope = match kind {
                    ScopeKind::Source => scopes.source_scope(variant),
                    ScopeKind::Exclude => scopes.exclude_scope(variant),
                };
                rows.extend(scope.roots().map(|location| ScopeRootView {
                    module: scopes.module().name().to_string(),
                    variant: variant.to_string(),
                    kind: kind.to_string(),
                    root: display_location(location, root),
                }));
            }
        }
    }

    if rows.is_empty() {
        println!("No test scopes found.");
    } else {
        println!("{}", Table::new(rows));
    }
}

fn print_json(
    session: &Session,
    entries: &[&TestArtifactScopes],
    variants: &[TestVariant],
) -> serde_json::Result<()> {
    let modules: Vec<_> = entries
        .iter()
        .map(|scopes| {
            let mut artifacts = serde_json::Map::new();
            for &variant in variants {
                artifacts.insert(
                    variant.to_string(),
                    json!({
                        "source": scopes.source_scope(variant),
                        "exclude": scopes.exclude_scope(variant),
                    }),
                );
            }
            json!({
                "module": scopes.module().name(),
                "selected_variant": scopes.build_model().selected_variant,
                "language_level": session.project().language_level(scopes.module()),
                "artifacts": artifacts,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&modules)?);
    Ok(())
}
