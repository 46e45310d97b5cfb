use proptest::prelude::*;
use sanepath_core::{sanitize, PathFlavor, PathOrderer, SanitizePolicy};
use std::cmp::Ordering;

fn raw_path() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\\".to_string()),
            Just("/".to_string()),
            Just(".".to_string()),
            Just("..".to_string()),
            Just(" ".to_string()),
            Just("?".to_string()),
            Just(":".to_string()),
            Just("C:".to_string()),
            Just("CON".to_string()),
            Just("lpt1".to_string()),
            Just("|*\"<>".to_string()),
            Just("\u{1}".to_string()),
            Just("\u{FF3C}".to_string()),
            Just("\u{FF1F}".to_string()),
            Just("\u{FF0F}".to_string()),
            "[a-zA-Z0-9é]{1,4}",
        ],
        0..12,
    )
    .prop_map(|tokens| tokens.concat())
}

fn policy() -> impl Strategy<Value = SanitizePolicy> {
    (
        prop::sample::select(vec!['_', '-', '~', '#']),
        any::<[bool; 5]>(),
        prop::sample::select(vec![PathFlavor::Windows, PathFlavor::Posix]),
    )
        .prop_map(|(escape_char, flags, flavor)| SanitizePolicy {
            escape_char,
            allow_drive_letter: flags[0],
            allow_current_directory: flags[1],
            allow_parent_directory: flags[2],
            allow_inactivation: flags[3],
            allow_unc: flags[4],
            flavor,
        })
}

fn short_path() -> impl Strategy<Value = String> {
    "[ab12./]{0,8}"
}

// Directory-ness only has to be a stable function of the path.
fn even_length_is_dir(path: &str) -> bool {
    path.len() % 2 == 0
}

proptest! {
    #[test]
    fn sanitizing_twice_changes_nothing(raw in raw_path(), policy in policy()) {
        let once = sanitize(&raw, &policy);
        let twice = sanitize(&once.value, &policy);
        prop_assert_eq!(&twice.value, &once.value);
        prop_assert_eq!(&twice.parts, &once.parts);
    }

    #[test]
    fn sanitized_parts_are_never_empty(raw in raw_path(), policy in policy()) {
        let result = sanitize(&raw, &policy);
        prop_assert!(result.parts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn escaping_preserves_segment_length(segment in "[a-z|*?<>]{1,10}") {
        // The leading `x` keeps the name clear of reserved device names.
        let name = format!("x{segment}");
        let policy = SanitizePolicy::for_flavor(PathFlavor::Windows);
        let result = sanitize(&format!("dir\\{name}"), &policy);
        prop_assert_eq!(result.parts.len(), 2);
        prop_assert_eq!(result.parts[1].chars().count(), name.chars().count());
    }

    #[test]
    fn ordering_is_reflexive_and_antisymmetric(a in short_path(), b in short_path()) {
        let orderer = PathOrderer::new(even_length_is_dir).with_flavor(PathFlavor::Posix);
        prop_assert_eq!(orderer.compare(&a, &a), Ordering::Equal);
        prop_assert_eq!(orderer.compare(&a, &b), orderer.compare(&b, &a).reverse());
    }

    #[test]
    fn ordering_is_transitive(a in short_path(), b in short_path(), c in short_path()) {
        let orderer = PathOrderer::new(even_length_is_dir).with_flavor(PathFlavor::Posix);
        let mut paths = [a, b, c];
        orderer.sort(&mut paths);
        prop_assert_ne!(orderer.compare(&paths[0], &paths[1]), Ordering::Greater);
        prop_assert_ne!(orderer.compare(&paths[1], &paths[2]), Ordering::Greater);
        prop_assert_ne!(orderer.compare(&paths[0], &paths[2]), Ordering::Greater);
    }
}
