use super::{DirectoryProbe, NaturalComparer, SegmentComparer};
use crate::path_utils::{split_extension, PathFlavor};
use crate::sanitize::{split, SanitizePolicy};
use std::cmp::Ordering;
use std::hash::Hasher;

/// Orders paths the way a file browser lists them.
///
/// Both paths are split into their meaningful segments (navigation tokens
/// and prefixes dropped) and compared segment by segment; an ancestor sorts
/// before its descendants. The last segment of a path that isn't a directory
/// is compared as stem and extension, every other segment as a whole.
///
/// The probe is asked once per path per comparison. Sorting a large list
/// with a probe that hits the disk costs O(n log n) lookups, so callers
/// usually hand in a pre-resolved probe.
#[derive(Debug, Clone)]
pub struct PathOrderer<P, C = NaturalComparer> {
    probe: P,
    comparer: C,
    policy: SanitizePolicy,
}

impl<P: DirectoryProbe> PathOrderer<P> {
    pub fn new(probe: P) -> Self {
        Self::with_comparer(probe, NaturalComparer::new())
    }
}

impl<P: DirectoryProbe, C: SegmentComparer> PathOrderer<P, C> {
    pub fn with_comparer(probe: P, comparer: C) -> Self {
        Self {
            probe,
            comparer,
            policy: SanitizePolicy::ordering(PathFlavor::native()),
        }
    }

    pub fn with_flavor(mut self, flavor: PathFlavor) -> Self {
        self.policy = SanitizePolicy::ordering(flavor);
        self
    }

    pub fn flavor(&self) -> PathFlavor {
        self.policy.flavor
    }

    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn compare(&self, x: &str, y: &str) -> Ordering {
        let x_dir = self.probe.is_directory(x);
        let y_dir = self.probe.is_directory(y);

        let xs = split(x, &self.policy);
        let ys = split(y, &self.policy);

        for i in 0..xs.len().max(ys.len()) {
            let (x_seg, y_seg) = match (xs.get(i), ys.get(i)) {
                (Some(a), Some(b)) => (a, b),
                (None, _) => return Ordering::Less,
                (_, None) => return Ordering::Greater,
            };

            let (x_stem, x_ext) = segment_key(x_seg, x_dir, i + 1 == xs.len());
            let (y_stem, y_ext) = segment_key(y_seg, y_dir, i + 1 == ys.len());

            let ord = self
                .comparer
                .compare(x_stem, y_stem)
                .then_with(|| self.comparer.compare(x_ext, y_ext));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        Ordering::Equal
    }

    /// `None` sorts before everything else.
    pub fn compare_opt(&self, x: Option<&str>, y: Option<&str>) -> Ordering {
        match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => self.compare(x, y),
        }
    }

    /// Equality of the inner comparer, applied to the raw strings.
    pub fn equals(&self, a: &str, b: &str) -> bool {
        self.comparer.equals(a, b)
    }

    pub fn hash_str(&self, s: &str, state: &mut dyn Hasher) {
        self.comparer.hash_str(s, state)
    }

    pub fn sort<S: AsRef<str>>(&self, paths: &mut [S]) {
        paths.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

fn segment_key(segment: &str, is_dir: bool, is_last: bool) -> (&str, &str) {
    if !is_dir && is_last {
        split_extension(segment)
    } else {
        (segment, "")
    }
}
