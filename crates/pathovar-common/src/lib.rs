//! pathovar-common — Shared errors, the allow-listed HTTP client and
//! variant identifier checks used across all pathovar crates.

pub mod error;
pub mod sandbox;
pub mod variant;

// Re-export commonly used types
pub use error::{PathovarError, Result};
pub use sandbox::SandboxClient;
pub use variant::validate_variant_id;
