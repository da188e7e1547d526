pub mod cache;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod scope;
pub mod watch;

pub use cache::{ResyncSummary, ScopeCache};
pub use config::ScopeConfig;
pub use error::Result;
pub use fs::LocalFileResolver;
pub use scope::{FileRootScope, ScopeKind, TestArtifactScopes};
