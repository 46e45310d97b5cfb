use camino::Utf8PathBuf;
use sanepath_core::{PathFlavor, SanitizePolicy};
use sanepath_infra::{resolve_under, InfraError, InfraErrorKind};

fn root() -> Utf8PathBuf {
    Utf8PathBuf::from("/srv/uploads")
}

#[test]
fn traversal_cannot_climb_out_of_root() {
    let policy = SanitizePolicy::for_flavor(PathFlavor::Posix);
    let resolved = resolve_under(&root(), "../../etc/passwd", &policy).unwrap();
    assert_eq!(resolved, root().join("etc").join("passwd"));

    let resolved = resolve_under(&root(), "/etc/./shadow", &policy).unwrap();
    assert_eq!(resolved, root().join("etc").join("shadow"));
}

#[test]
fn windows_style_absolute_paths_become_relative() {
    let policy = SanitizePolicy::for_flavor(PathFlavor::Windows);

    let resolved = resolve_under(&root(), "C:\\Windows\\System32", &policy).unwrap();
    assert_eq!(resolved, root().join("C_").join("Windows").join("System32"));

    let resolved = resolve_under(&root(), "\\\\?\\C:\\x", &policy).unwrap();
    assert_eq!(resolved, root().join("C_").join("x"));

    let resolved = resolve_under(&root(), "\\\\server\\share\\CON.txt", &policy).unwrap();
    assert_eq!(resolved, root().join("server").join("share").join("_CON.txt"));
}

#[test]
fn escape_char_comes_from_the_policy() {
    let policy = SanitizePolicy::for_flavor(PathFlavor::Windows).with_escape_char('-');
    let resolved = resolve_under(&root(), "a|b/c", &policy).unwrap();
    assert_eq!(resolved, root().join("a-b").join("c"));
}

#[test]
fn nothing_left_is_an_error() {
    let policy = SanitizePolicy::for_flavor(PathFlavor::Posix);
    for raw in ["", "..", "./../.", "/"] {
        let err = resolve_under(&root(), raw, &policy).unwrap_err();
        assert_eq!(err.kind(), InfraErrorKind::UnsafePath, "input {raw:?}");
    }
}

#[test]
fn escape_char_that_builds_navigation_is_refused() {
    // `?` and `.` would both become `.`, turning "?." into "..".
    let policy = SanitizePolicy::for_flavor(PathFlavor::Windows).with_escape_char('.');
    let err = resolve_under(&root(), "?.", &policy).unwrap_err();
    assert_eq!(err.kind(), InfraErrorKind::UnsafePath);
    assert!(matches!(err, InfraError::UnusableEscapeChar('.', _)));
}

#[test]
fn escape_char_that_builds_absolute_paths_is_refused() {
    // `:` escaped to `/` would make "/etc" replace the root when pushed.
    let policy = SanitizePolicy::for_flavor(PathFlavor::Windows).with_escape_char('/');
    let err = resolve_under(&root(), ":etc/passwd", &policy).unwrap_err();
    assert_eq!(err.kind(), InfraErrorKind::UnsafePath);
}

#[test]
fn every_hostile_escape_char_is_refused() {
    for flavor in [PathFlavor::Windows, PathFlavor::Posix] {
        for escape in ['.', ' ', '/', '\0', '\u{7f}'] {
            let policy = SanitizePolicy::for_flavor(flavor).with_escape_char(escape);
            let result = resolve_under(&root(), "a|b/c", &policy);
            assert!(
                matches!(result, Err(InfraError::UnusableEscapeChar(c, _)) if c == escape),
                "{flavor} accepted {escape:?}"
            );
        }
    }

    let policy = SanitizePolicy::for_flavor(PathFlavor::Windows).with_escape_char('\\');
    assert!(resolve_under(&root(), "x", &policy).is_err());
}

#[test]
fn resolved_paths_stay_under_the_root() {
    let policy = SanitizePolicy::for_flavor(PathFlavor::Windows);
    let hostile = [
        "?.",
        "..\\..",
        ":etc/passwd",
        "\\\\?\\..\\x",
        "//?/C:/..",
        "\u{FF0E}\u{FF0E}/x",
    ];
    for raw in hostile {
        if let Ok(resolved) = resolve_under(&root(), raw, &policy) {
            assert!(resolved.starts_with(root()), "{raw:?} -> {resolved}");
            assert!(resolved
                .strip_prefix(root())
                .unwrap()
                .components()
                .all(|c| matches!(c, camino::Utf8Component::Normal(_))));
        }
    }
}
