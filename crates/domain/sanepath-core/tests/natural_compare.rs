use sanepath_core::{compare_natural, NaturalComparer, SegmentComparer};
use std::cmp::Ordering;

#[test]
fn digit_runs_compare_as_numbers() {
    assert_eq!(compare_natural("file2", "file10"), Ordering::Less);
    assert_eq!(compare_natural("file10", "file2"), Ordering::Greater);
    assert_eq!(compare_natural("a9b", "a10a"), Ordering::Less);
    assert_eq!(compare_natural("2024-1-5", "2024-01-12"), Ordering::Less);
}

#[test]
fn non_digits_compare_ordinally() {
    assert_eq!(compare_natural("B", "a"), Ordering::Less);
    assert_eq!(compare_natural("abc", "abd"), Ordering::Less);
    assert_eq!(compare_natural("ab", "abc"), Ordering::Less);
    assert_eq!(compare_natural("", ""), Ordering::Equal);
    assert_eq!(compare_natural("", "0"), Ordering::Less);
}

#[test]
fn digits_sort_between_punctuation_and_letters() {
    assert_eq!(compare_natural("a 1", "a1"), Ordering::Less);
    assert_eq!(compare_natural("a1", "aa"), Ordering::Less);
}

#[test]
fn ties_are_broken_ordinally() {
    assert_eq!(compare_natural("x01", "x1"), Ordering::Less);
    assert_eq!(compare_natural("x1", "x01"), Ordering::Greater);
    assert_eq!(compare_natural("x1", "x1"), Ordering::Equal);
}

#[test]
fn case_insensitive_variant_groups_by_letter() {
    let cmp = NaturalComparer::ignore_case();
    assert!(cmp.is_case_insensitive());
    assert_eq!(cmp.compare("B", "a"), Ordering::Greater);
    assert_eq!(cmp.compare("readme2", "README10"), Ordering::Less);
    // Still a total order: equal only when identical.
    assert_ne!(cmp.compare("File", "file"), Ordering::Equal);
    assert!(!cmp.equals("File", "file"));
}

#[test]
fn sorting_a_version_list() {
    let mut names = vec!["v10", "v1", "v2.10", "v2.9", "v2"];
    names.sort_by(|a, b| compare_natural(a, b));
    assert_eq!(names, vec!["v1", "v2", "v2.9", "v2.10", "v10"]);
}
