pub mod error;
pub mod listing;
pub mod probe;
pub mod resolve;

// Re-exports for convenience
pub use error::{InfraError, InfraErrorKind};
pub use listing::{list_directory, list_directory_with, Entry, ListOptions};
pub use probe::{CachedProbe, FsProbe};
pub use resolve::resolve_under;
