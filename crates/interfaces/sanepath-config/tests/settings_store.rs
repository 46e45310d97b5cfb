use sanepath_config::{ComparerChoice, ConfigError, Settings, SettingsStore, DEFAULT_ESCAPE_CHAR};
use sanepath_core::PathFlavor;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::at(dir.path().join("nested"));

    let settings = store.load().unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.policy().escape_char, DEFAULT_ESCAPE_CHAR);
    assert_eq!(settings.comparer, ComparerChoice::Natural);
}

#[test]
fn save_then_load_keeps_changes() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::at(dir.path().join("nested"));

    let mut settings = Settings::default();
    settings.set("escape_char", "-").unwrap();
    settings.set("allow_parent_directory", "no").unwrap();
    settings.set("flavor", "windows").unwrap();
    settings.set("comparer", "ordinal-ignore-case").unwrap();
    settings.set("include_hidden", "true").unwrap();
    store.save(&settings).unwrap();

    assert!(store.path().exists());
    assert!(!store.path().with_extension("json.tmp").exists());

    let loaded = store.load().unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.policy().escape_char, '-');
    assert!(!loaded.policy().allow_parent_directory);
    assert_eq!(loaded.policy().flavor, PathFlavor::Windows);
    assert_eq!(loaded.comparer, ComparerChoice::OrdinalIgnoreCase);
    assert!(loaded.include_hidden);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::at(dir.path());
    fs::write(
        store.path(),
        r#"{ "policy": { "escape_char": "~" }, "comparer": "ordinal" }"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.policy.escape_char, '~');
    assert!(loaded.policy.allow_drive_letter);
    assert_eq!(loaded.comparer, ComparerChoice::Ordinal);
    assert!(!loaded.include_hidden);
}

#[test]
fn corrupt_or_unsafe_files_are_rejected() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::at(dir.path());

    fs::write(store.path(), "{ not json").unwrap();
    assert!(matches!(store.load(), Err(ConfigError::Serde(_))));

    fs::write(store.path(), r#"{ "policy": { "escape_char": "/" } }"#).unwrap();
    assert!(matches!(
        store.load(),
        Err(ConfigError::InvalidEscapeChar('/', _))
    ));
}

#[test]
fn reset_removes_the_file() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::at(dir.path());

    store.reset().unwrap();
    store.save(&Settings::default()).unwrap();
    assert!(store.path().exists());
    store.reset().unwrap();
    assert!(!store.path().exists());
}

#[test]
fn escape_char_must_survive_sanitization() {
    let mut settings = Settings::default();
    settings.set("flavor", "posix").unwrap();

    for bad in ["/", ".", " ", "\u{7}"] {
        assert!(
            matches!(settings.set("escape_char", bad), Err(ConfigError::InvalidEscapeChar(..))),
            "accepted {bad:?}"
        );
    }
    assert!(matches!(
        settings.set("escape_char", "ab"),
        Err(ConfigError::InvalidValue { .. })
    ));

    // Legal on posix, invalid on windows.
    settings.set("escape_char", ":").unwrap();
    assert!(matches!(
        settings.set("flavor", "windows"),
        Err(ConfigError::InvalidEscapeChar(':', _))
    ));
    assert_eq!(settings.policy.flavor, PathFlavor::Posix);
}

#[test]
fn unknown_keys_and_bad_values() {
    let mut settings = Settings::default();
    assert!(matches!(
        settings.set("colour", "blue"),
        Err(ConfigError::UnknownKey(k)) if k == "colour"
    ));
    assert!(matches!(
        settings.set("allow_unc", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        settings.set("comparer", "random"),
        Err(ConfigError::InvalidValue { .. })
    ));

    for key in Settings::KEYS {
        assert!(!matches!(settings.set(key, "???"), Err(ConfigError::UnknownKey(_))));
    }
}

#[test]
fn comparer_names_round_trip_through_text() {
    for choice in [
        ComparerChoice::Natural,
        ComparerChoice::NaturalIgnoreCase,
        ComparerChoice::Ordinal,
        ComparerChoice::OrdinalIgnoreCase,
    ] {
        assert_eq!(choice.to_string().parse::<ComparerChoice>().unwrap(), choice);
        let json = serde_json::to_string(&choice).unwrap();
        assert_eq!(json, format!("\"{choice}\""));
    }
}
