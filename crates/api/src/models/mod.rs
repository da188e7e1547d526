pub mod build;
pub mod id;
pub mod location;
pub mod variant;

pub use build::*;
pub use id::*;
pub use location::*;
pub use variant::*;
