use std::path::Path;
use tabled::Tabled;
use testscope_api::Location;

/// One root of one scope
#[derive(Tabled)]
pub struct ScopeRootView {
    #[tabled(rename = "Module")]
    pub module: String,
    #[tabled(rename = "Artifact")]
    pub variant: String,
    #[tabled(rename = "Scope")]
    pub kind: String,
    #[tabled(rename = "Root")]
    pub root: String,
}

/// Membership of a path in the scopes of one module
#[derive(Tabled)]
pub struct ClassificationView {
    #[tabled(rename = "Module")]
    pub module: String,
    #[tabled(rename = "Android test source")]
    pub android_test_source: &'static str,
    #[tabled(rename = "Unit test source")]
    pub unit_test_source: &'static str,
    #[tabled(rename = "Hidden from android tests")]
    pub android_test_excluded: &'static str,
    #[tabled(rename = "Hidden from unit tests")]
    pub unit_test_excluded: &'static str,
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "-" }
}

/// Location relative to the project root when it lies under it.
pub fn display_location(location: &Location, project_root: &Path) -> String {
    let shorten = |p: &Path| -> String {
        match p.strip_prefix(project_root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
            _ => p.display().to_string(),
        }
    };

    match location {
        Location::File { path } => shorten(path),
        Location::ArchiveEntry { archive, entry } => {
            format!("{}{}{}", shorten(archive), testscope_api::ARCHIVE_SEPARATOR, entry)
        }
    }
}
