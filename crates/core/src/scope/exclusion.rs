//! Which dependencies of the other test artifact are foreign to this one.
//!
//! Everything here works on plain sets so the policy can be tested without a
//! project model: a dependency used by both artifacts stays visible to both.

use std::collections::BTreeSet;
use testscope_api::ModuleId;

/// `unwanted \ wanted`: what only the other side uses.
pub fn foreign_dependencies<T: Ord + Clone>(
    wanted: &BTreeSet<T>,
    unwanted: &BTreeSet<T>,
) -> BTreeSet<T> {
    unwanted.difference(wanted).cloned().collect()
}

/// Resolved dependencies of one test artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub libraries: BTreeSet<String>,
    pub modules: BTreeSet<ModuleId>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_library(&mut self, name: impl Into<String>) {
        self.libraries.insert(name.into());
    }

    pub fn add_module(&mut self, module: ModuleId) {
        self.modules.insert(module);
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty() && self.modules.is_empty()
    }
}

/// Libraries and modules to hide from the current artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPlan {
    pub libraries: BTreeSet<String>,
    pub modules: BTreeSet<ModuleId>,
}

pub fn plan_exclusion(wanted: &DependencySet, unwanted: &DependencySet) -> ExclusionPlan {
    ExclusionPlan {
        libraries: foreign_dependencies(&wanted.libraries, &unwanted.libraries),
        modules: foreign_dependencies(&wanted.modules, &unwanted.modules),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testscope_api::ProjectId;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn module(name: &str) -> ModuleId {
        ModuleId::new(ProjectId::new("demo"), name)
    }

    #[test]
    fn test_shared_dependencies_are_never_foreign() {
        let wanted = set(&["espresso", "hamcrest"]);
        let unwanted = set(&["junit", "hamcrest"]);

        assert_eq!(foreign_dependencies(&wanted, &unwanted), set(&["junit"]));
        assert_eq!(foreign_dependencies(&unwanted, &wanted), set(&["espresso"]));
    }

    #[test]
    fn test_empty_sides() {
        let some = set(&["junit"]);
        let none = BTreeSet::new();

        assert_eq!(foreign_dependencies(&none, &some), some);
        assert!(foreign_dependencies(&some, &none).is_empty());
    }

    #[test]
    fn test_plan_covers_libraries_and_modules() {
        let mut wanted = DependencySet::new();
        wanted.add_library("hamcrest");
        wanted.add_module(module("common"));

        let mut unwanted = DependencySet::new();
        unwanted.add_library("hamcrest");
        unwanted.add_library("robolectric");
        unwanted.add_module(module("common"));
        unwanted.add_module(module("testing-jvm"));

        let plan = plan_exclusion(&wanted, &unwanted);
        assert_eq!(plan.libraries, set(&["robolectric"]));
        assert_eq!(plan.modules, [module("testing-jvm")].into_iter().collect());
    }
}
