use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectId(SmolStr);

impl ProjectId {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a module. A module always knows the project it belongs to,
/// so cache entries can be dropped project by project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId {
    project: ProjectId,
    name: SmolStr,
}

impl ModuleId {
    pub fn new(project: ProjectId, name: impl AsRef<str>) -> Self {
        Self {
            project,
            name: SmolStr::new(name),
        }
    }

    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project:{}::module:{}", self.project, self.name)
    }
}
