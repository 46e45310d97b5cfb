//! Path sanitization and file-browser ordering.
//!
//! [`sanitize`] turns an arbitrary, possibly hostile path string into a
//! legal one under a [`SanitizePolicy`]. [`PathOrderer`] sorts paths
//! segment by segment with natural number handling, using the same
//! splitting rules.

pub mod compare;
pub mod path_utils;
pub mod sanitize;

pub use compare::{
    compare_natural, DirectoryProbe, NaturalComparer, NoDirectories, Ordinal, OrdinalIgnoreCase,
    PathOrderer, SegmentComparer,
};
pub use path_utils::{is_reserved_name, split_extension, PathFlavor};
pub use sanitize::{
    classify, sanitize, sanitize_file_name, sanitize_opt, split, PathKind, PathSanitizer,
    SanitizePolicy, SanitizedPath,
};
