//! Integration tests for Settings layered loading.
//!
//! These pass the global file location explicitly so the developer's own
//! XDG config never leaks into the results.

use std::fs;

use tempfile::TempDir;

use treeflip::config::Settings;
use treeflip::{Strategy, TreeError};

#[test]
fn given_global_file_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("treeflip.toml");
    fs::write(&global, "strategy = \"recursive\"\nshow_shape = true\n").unwrap();

    let settings = Settings::load_from(Some(global.as_path()), None).expect("load settings");

    assert_eq!(settings.strategy, Strategy::Recursive);
    assert!(settings.show_shape);
    assert_eq!(settings.separator, " ", "unspecified keys keep defaults");
}

#[test]
fn given_explicit_file_when_loading_then_wins_over_global() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&global, "strategy = \"recursive\"\nseparator = \",\"\n").unwrap();
    fs::write(&explicit, "strategy = \"stack\"\n").unwrap();

    let settings = Settings::load_from(Some(global.as_path()), Some(explicit.as_path()))
        .expect("load settings");

    assert_eq!(settings.strategy, Strategy::Stack);
    assert_eq!(settings.separator, ",", "global value survives when explicit omits it");
}

#[test]
fn given_missing_explicit_file_when_loading_then_config_file_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load_from(None, Some(missing.as_path())).unwrap_err();

    assert!(matches!(err, TreeError::ConfigFile { ref path, .. } if path == &missing));
}

#[test]
fn given_unknown_strategy_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("bad.toml");
    fs::write(&explicit, "strategy = \"sideways\"\n").unwrap();

    let err = Settings::load_from(None, Some(explicit.as_path())).unwrap_err();

    assert!(matches!(err, TreeError::Config(_)), "got {err:?}");
}

#[test]
fn given_settings_when_rendered_to_toml_then_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roundtrip.toml");
    let settings = Settings {
        strategy: Strategy::Stack,
        separator: " | ".to_string(),
        show_shape: true,
    };
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    let loaded = Settings::load_from(None, Some(path.as_path())).unwrap();

    assert_eq!(loaded, settings);
}
