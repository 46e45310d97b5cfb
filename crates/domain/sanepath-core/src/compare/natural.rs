use super::SegmentComparer;
use std::cmp::Ordering;

/// Compares runs of ASCII digits as numbers and everything else by code
/// point, so `file2` sorts before `file10`.
///
/// Digit runs have no size limit. Runs with the same value but different
/// leading zeros tie at first; when two strings tie all the way through the
/// plain ordinal order decides, which keeps the order total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalComparer {
    ignore_case: bool,
}

impl NaturalComparer {
    pub const fn new() -> Self {
        Self { ignore_case: false }
    }

    /// Non-digit characters compare lower-cased. Names differing only in
    /// case still end up ordered, not equal.
    pub const fn ignore_case() -> Self {
        Self { ignore_case: true }
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.ignore_case
    }

    fn compare_runs(&self, mut a: &str, mut b: &str) -> Ordering {
        loop {
            let (ca, cb) = match (a.chars().next(), b.chars().next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(ca), Some(cb)) => (ca, cb),
            };

            if ca.is_ascii_digit() && cb.is_ascii_digit() {
                let (na, rest_a) = take_digits(a);
                let (nb, rest_b) = take_digits(b);
                match compare_numbers(na, nb) {
                    Ordering::Equal => {}
                    other => return other,
                }
                a = rest_a;
                b = rest_b;
                continue;
            }

            let ord = if self.ignore_case {
                ca.to_lowercase().cmp(cb.to_lowercase())
            } else {
                ca.cmp(&cb)
            };
            if ord != Ordering::Equal {
                return ord;
            }
            a = &a[ca.len_utf8()..];
            b = &b[cb.len_utf8()..];
        }
    }
}

impl SegmentComparer for NaturalComparer {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.compare_runs(a, b).then_with(|| a.cmp(b))
    }
}

/// [`NaturalComparer::new`] as a free function.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    NaturalComparer::new().compare(a, b)
}

fn take_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
