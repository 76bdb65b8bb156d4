//! Tests for the formfill configuration system.

use std::sync::Mutex;

use formfill_core::config::{FillOptions, PasswordMode};
use formfill_core::errors::ConfigError;
use formfill_core::rules::KindTag;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all FORMFILL_ env vars to prevent cross-test contamination.
fn clear_formfill_env_vars() {
    for key in [
        "FORMFILL_DEFAULT_MAX_LENGTH",
        "FORMFILL_TRIGGER_EVENTS",
        "FORMFILL_UPLOAD_FILES",
        "FORMFILL_IGNORE_HIDDEN_FIELDS",
        "FORMFILL_IGNORE_FILLED_FIELDS",
        "FORMFILL_PASSWORD_MODE",
        "FORMFILL_PASSWORD",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_compiled_defaults() {
    let options = FillOptions::default();
    assert_eq!(options.default_max_length, 20);
    assert!(options.trigger_events);
    assert!(options.field_match.match_name);
    assert!(!options.field_match.match_label);
    assert_eq!(options.password.mode, PasswordMode::Defined);
    // The built-in rule list is present and covers the core kinds.
    assert!(options.fields.iter().any(|r| r.tag() == KindTag::Email));
    assert!(options.fields.iter().any(|r| r.tag() == KindTag::Telephone));
    assert!(options.fields.iter().any(|r| r.tag() == KindTag::Date));
}

#[test]
fn test_layered_resolution_env_over_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_formfill_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("formfill.toml"),
        r#"
defaultMaxLength = 40
triggerClickEvents = false
"#,
    )
    .unwrap();

    std::env::set_var("FORMFILL_DEFAULT_MAX_LENGTH", "64");

    let options = FillOptions::load(dir.path()).unwrap();

    // Env overrides project for max length; project still wins elsewhere.
    assert_eq!(options.default_max_length, 64);
    assert!(!options.trigger_events);

    clear_formfill_env_vars();
}

#[test]
fn test_load_without_files_yields_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_formfill_env_vars();

    let dir = tempdir();
    let options = FillOptions::load(dir.path()).unwrap();
    assert_eq!(options.default_max_length, FillOptions::default().default_max_length);
    assert_eq!(options.fields.len(), FillOptions::default().fields.len());
}

#[test]
fn test_project_rules_replace_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_formfill_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("formfill.toml"),
        r#"
[[fields]]
type = "username"
name = "Login"
match = ["login"]
"#,
    )
    .unwrap();

    let options = FillOptions::load(dir.path()).unwrap();
    assert_eq!(options.fields.len(), 1);
    assert_eq!(options.fields[0].name, "Login");
    assert_eq!(options.fields[0].tag(), KindTag::Username);
}

#[test]
fn test_from_json_partial_blob_fills_in_defaults() {
    let options = FillOptions::from_json(r#"{"defaultMaxLength": 33}"#).unwrap();
    assert_eq!(options.default_max_length, 33);
    // Untouched keys fall back to compiled defaults.
    assert!(options.ignore_hidden_fields);
    assert!(!options.fields.is_empty());
}

#[test]
fn test_from_json_rejects_malformed() {
    let err = FillOptions::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validate_rejects_zero_max_length() {
    let mut options = FillOptions::default();
    options.default_max_length = 0;
    let err = FillOptions::validate(&options).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_validate_rejects_empty_defined_password() {
    let mut options = FillOptions::default();
    options.password.password = String::new();
    let err = FillOptions::validate(&options).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { field, .. } if field.contains("password")
    ));
}

#[test]
fn test_validate_rejects_rule_without_patterns() {
    let mut options = FillOptions::default();
    options.fields[0].match_patterns.clear();
    assert!(FillOptions::validate(&options).is_err());
}

#[test]
fn test_toml_parse_error_reports_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_formfill_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("formfill.toml"), "not = [valid").unwrap();

    let err = FillOptions::load(dir.path()).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.contains("formfill.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
