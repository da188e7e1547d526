mod cache;

pub use cache::{GradleCacheDiscoverer, MavenCoordinates};
