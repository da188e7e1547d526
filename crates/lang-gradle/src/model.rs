//! The sync snapshot: a JSON dump of a project's Gradle build model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use testscope_api::{BuildModel, ContentRoot};

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SyncSnapshot {
    /// Project name, used as the project id.
    pub project: String,
    /// Base for relative paths. Defaults to the snapshot's directory; a
    /// relative root is taken relative to that directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// The project library table, by library name.
    #[serde(default)]
    pub libraries: BTreeMap<String, LibraryEntry>,
    #[serde(default)]
    pub modules: Vec<GradleModule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LibraryEntry {
    /// `group:artifact:version`, used to find the library in the Gradle cache
    /// when `classes` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    /// Class roots. Archives may be given as `lib.jar` or `lib.jar!/`.
    #[serde(default)]
    pub classes: Vec<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GradleModule {
    pub name: String,
    /// Gradle project path; defaults to `:<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradle_path: Option<String>,
    #[serde(default)]
    pub content_roots: Vec<ContentRoot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_output: Option<PathBuf>,
    /// Android build model; absent for plain Java modules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<BuildModel>,
}

impl GradleModule {
    pub fn gradle_path(&self) -> String {
        self.gradle_path
            .clone()
            .unwrap_or_else(|| format!(":{}", self.name))
    }
}

/// JSON schema of [`SyncSnapshot`].
pub fn snapshot_schema() -> serde_json::Value {
    schemars::schema_for!(SyncSnapshot).to_value()
}
