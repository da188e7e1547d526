//! Gradle cache lookup.
//!
//! Finds library JARs in the Gradle cache directory:
//! `~/.gradle/caches/modules-2/files-2.1/{group}/{artifact}/{version}/{hash}/{file}`

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use walkdir::WalkDir;

/// `group:artifact:version`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinates {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl FromStr for MavenCoordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Self {
                    group: group.to_string(),
                    artifact: artifact.to_string(),
                    version: version.to_string(),
                })
            }
            _ => Err(format!("not a group:artifact:version coordinate: {}", s)),
        }
    }
}

impl fmt::Display for MavenCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Gradle cache discoverer
pub struct GradleCacheDiscoverer {
    cache_path: Option<PathBuf>,
}

impl GradleCacheDiscoverer {
    pub fn new() -> Self {
        let cache_path = dirs::home_dir().map(|h| h.join(".gradle/caches/modules-2/files-2.1"));

        Self { cache_path }
    }

    /// Create with a custom cache path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            cache_path: Some(path),
        }
    }

    /// Binary JARs cached for `coordinates`, sorted. Sources and javadoc JARs
    /// are skipped.
    pub fn find_jars(&self, coordinates: &MavenCoordinates) -> Vec<PathBuf> {
        let Some(cache_path) = &self.cache_path else {
            return Vec::new();
        };

        let version_dir = cache_path
            .join(&coordinates.group)
            .join(&coordinates.artifact)
            .join(&coordinates.version);
        if !version_dir.is_dir() {
            return Vec::new();
        }

        let mut jars: Vec<PathBuf> = WalkDir::new(&version_dir)
            .max_depth(2)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|ext| ext.to_str()) == Some("jar"))
            .filter(|e| {
                let name = e.path().file_name().and_then(|n| n.to_str()).unwrap_or("");
                !name.ends_with("-sources.jar") && !name.ends_with("-javadoc.jar")
            })
            .map(|e| e.path().to_path_buf())
            .collect();
        jars.sort();
        jars.dedup_by(|a, b| a.file_name() == b.file_name());
        jars
    }
}

impl Default for GradleCacheDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}
