use crate::error::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use tracing::{debug, warn};

/// Watches a single file for changes.
///
/// The parent directory is watched rather than the file, since editors and
/// sync tools tend to replace the file instead of writing it in place.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    target: PathBuf,
    debounce: Duration,
}

impl FileWatcher {
    pub fn new(target: &Path, debounce: Duration) -> Result<Self> {
        let target = target.canonicalize()?;
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
            target,
            debounce,
        })
    }

    fn touches_target(&self, event: &Event) -> bool {
        event
            .paths
            .iter()
            .any(|p| p.file_name() == self.target.file_name())
    }

    /// Block until the target changes, then wait for a quiet period so a burst
    /// of writes counts once. Returns `false` when the watcher has shut down.
    pub fn wait_for_change(&self) -> bool {
        loop {
            match self.rx.recv() {
                Ok(Ok(event)) if self.touches_target(&event) => break,
                Ok(Ok(_)) => continue,
                Ok(Err(e)) => warn!("Watch error: {}", e),
                Err(_) => return false,
            }
        }

        loop {
            match self.rx.recv_timeout(self.debounce) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }

        debug!("Change detected on {}", self.target.display());
        true
    }
}
