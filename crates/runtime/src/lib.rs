use std::path::{Path, PathBuf};
use std::sync::Arc;
use testscope_api::{ModuleId, ProjectModel};
use testscope_core::watch::FileWatcher;
use testscope_core::{LocalFileResolver, Result, ResyncSummary, ScopeCache, ScopeConfig, TestArtifactScopes};
use testscope_gradle::GradleProject;
use tracing::{error, info};

/// A loaded sync snapshot together with the scope cache built from it.
pub struct Session {
    snapshot: PathBuf,
    config: ScopeConfig,
    project: Arc<GradleProject>,
    cache: ScopeCache,
}

/// Load `snapshot` and run the initial resync.
pub fn open_session(snapshot: &Path, config: ScopeConfig) -> Result<Session> {
    let project = Arc::new(GradleProject::load(snapshot, &config)?);
    let resolver = LocalFileResolver::with_canonicalize(config.canonicalize_paths);
    let mut cache = ScopeCache::new(Arc::new(resolver));
    cache.resync_project(project.clone());

    Ok(Session {
        snapshot: snapshot.to_path_buf(),
        config,
        project,
        cache,
    })
}

impl Session {
    pub fn project(&self) -> &GradleProject {
        &self.project
    }

    pub fn scopes(&self, module: &ModuleId) -> Option<&TestArtifactScopes> {
        self.cache.get(module)
    }

    /// Entries of every Android module, ordered by module name.
    pub fn all_scopes(&self) -> impl Iterator<Item = &TestArtifactScopes> {
        self.cache.entries_for(self.project.id())
    }

    /// Reload the snapshot and resync its project. On a load error the
    /// previous state is kept.
    pub fn resync(&mut self) -> Result<ResyncSummary> {
        let project = Arc::new(GradleProject::load(&self.snapshot, &self.config)?);
        let summary = self.cache.resync_project(project.clone());
        self.project = project;
        Ok(summary)
    }

    /// Resync every time the snapshot changes, calling `on_sync` after each
    /// successful resync. Returns when the watcher shuts down.
    pub fn watch(&mut self, mut on_sync: impl FnMut(&Session, ResyncSummary)) -> Result<()> {
        let watcher = FileWatcher::new(&self.snapshot, self.config.watch_debounce())?;
        info!("Watching {}", self.snapshot.display());

        while watcher.wait_for_change() {
            match self.resync() {
                Ok(summary) => on_sync(self, summary),
                Err(e) => error!("Resync failed, keeping previous scopes: {}", e),
            }
        }
        Ok(())
    }
}

/// Initializes logging for `component`. Commands still run without it, so a
/// failure is reported and swallowed.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    match testscope_core::logging::init_logging(component, to_stderr) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    }
}
