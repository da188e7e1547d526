pub mod discoverer;
pub mod language_level;
pub mod model;
pub mod snapshot;

pub use discoverer::{GradleCacheDiscoverer, MavenCoordinates};
pub use language_level::{LanguageLevel, convert_to_gradle_string, parse_from_gradle_string};
pub use model::SyncSnapshot;
pub use snapshot::GradleProject;
