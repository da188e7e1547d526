use nu_ansi_term::Color;
use std::path::Path;
use testscope_core::ScopeConfig;
use tracing::info;

pub fn run(snapshot: &Path, config: ScopeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = testscope_runtime::open_session(snapshot, config)?;
    info!(
        "Loaded {} Android module(s) from {}",
        session.all_scopes().count(),
        snapshot.display()
    );

    session.watch(|session, summary| {
        println!(
            "{} {} module(s), {} dropped, {} without build model",
            Color::Green.bold().paint("Resynced"),
            summary.created,
            summary.removed,
            summary.skipped
        );
        for scopes in session.all_scopes() {
            info!(
                module = scopes.module().name(),
                "android test exclude roots: {}, unit test exclude roots: {}",
                scopes.android_test_exclude_scope().len(),
                scopes.unit_test_exclude_scope().len()
            );
        }
    })?;
    Ok(())
}
