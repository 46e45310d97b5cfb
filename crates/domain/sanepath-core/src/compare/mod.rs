//! Ordering of paths and of the text inside their segments.

use std::cmp::Ordering;
use std::hash::Hasher;

pub mod natural;
pub mod path_order;

pub use natural::{compare_natural, NaturalComparer};
pub use path_order::PathOrderer;

/// Three-way comparison of segment text.
///
/// `equals` and `hash_str` must agree with `compare`: strings that compare
/// `Equal` are equal and hash identically.
pub trait SegmentComparer {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    fn equals(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    fn hash_str(&self, s: &str, state: &mut dyn Hasher) {
        state.write(s.as_bytes());
        state.write_u8(0xff);
    }
}

/// Closures only supply `compare`; `equals` and `hash_str` keep the
/// byte-wise defaults. A closure must therefore treat two strings as `Equal`
/// only when they are identical. Case-insensitive or otherwise folding
/// orders need a type that overrides `hash_str`, like [`OrdinalIgnoreCase`].
impl<F> SegmentComparer for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Plain code-point order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordinal;

impl SegmentComparer for Ordinal {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Code-point order after upper-casing both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdinalIgnoreCase;

impl SegmentComparer for OrdinalIgnoreCase {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.chars()
            .flat_map(char::to_uppercase)
            .cmp(b.chars().flat_map(char::to_uppercase))
    }

    fn hash_str(&self, s: &str, state: &mut dyn Hasher) {
        for c in s.chars().flat_map(char::to_uppercase) {
            state.write_u32(c as u32);
        }
        state.write_u8(0xff);
    }
}

/// Answers whether a full path names a directory.
///
/// Implementations return `false` for paths that don't exist or can't be
/// inspected instead of failing.
pub trait DirectoryProbe {
    fn is_directory(&self, path: &str) -> bool;
}

impl<F> DirectoryProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_directory(&self, path: &str) -> bool {
        self(path)
    }
}

/// Probe for callers that only order plain file lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDirectories;

impl DirectoryProbe for NoDirectories {
    fn is_directory(&self, _path: &str) -> bool {
        false
    }
}
