pub mod error;
pub mod fs;
pub mod models;
pub mod project;

// Re-export commonly used types
pub use error::ApiError;
pub use fs::FileResolver;
pub use models::*;
pub use project::ProjectModel;
