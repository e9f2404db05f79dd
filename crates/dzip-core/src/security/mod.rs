//! Security checks applied during extraction.

pub mod path;
pub mod permissions;

// Re-export public types and functions
pub use path::ensure_within;
pub use path::join_entry;
pub use path::normalize;
pub use permissions::DIRECTORY_MODE;
pub use permissions::sanitize_permissions;
