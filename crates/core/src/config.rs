//! Runtime configuration.
//!
//! Read from `--config <file>` or `~/.testscope/config.json`; every field has
//! a default so a partial file (or no file at all) is fine.

use crate::error::{Result, TestScopeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// `~/.testscope`, or `./.testscope` when no home directory is known.
pub fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".testscope")
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GradleCacheConfig {
    /// Resolve libraries missing from the library table through the Gradle cache.
    pub enabled: bool,
    /// Overrides `~/.gradle/caches/modules-2/files-2.1`.
    pub path: Option<PathBuf>,
}

impl Default for GradleCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    /// File extensions whose library class roots are opened as archives.
    pub archive_extensions: Vec<String>,
    /// Resolve symlinks so equal files compare equal.
    pub canonicalize_paths: bool,
    pub gradle_cache: GradleCacheConfig,
    /// Quiet period after a snapshot change before resyncing.
    pub watch_debounce_ms: u64,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            archive_extensions: vec!["jar".to_string(), "zip".to_string()],
            canonicalize_paths: true,
            gradle_cache: GradleCacheConfig::default(),
            watch_debounce_ms: 500,
        }
    }
}

impl ScopeConfig {
    pub fn default_path() -> PathBuf {
        base_dir().join("config.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TestScopeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| TestScopeError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `explicit` if given (it must exist), else the default file if it
    /// exists, else defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path();
        if path.is_file() {
            debug!("Loading configuration from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn is_archive(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.archive_extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    pub fn watch_debounce(&self) -> Duration {
        Duration::from_millis(self.watch_debounce_ms)
    }
}
