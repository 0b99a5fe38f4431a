//! Tests for configuration loading.

use scrivener_core::{DEFAULT_MODEL, ScrivenerConfig, StageBudget};
use scrivener_error::ConfigErrorKind;
use std::io::Write;

#[test]
fn test_empty_config_uses_defaults() {
    let config: ScrivenerConfig = "".parse().expect("Valid TOML");
    assert_eq!(config, ScrivenerConfig::default());
    assert_eq!(config.provider().model(), DEFAULT_MODEL);
    assert_eq!(*config.budgets().titles(), StageBudget::new(1000, 0.7));
    assert_eq!(*config.budgets().outline(), StageBudget::new(2000, 0.7));
    assert_eq!(*config.budgets().section(), StageBudget::new(3000, 0.7));
}

#[test]
fn test_partial_config_overrides_only_named_fields() {
    let toml = r#"
[provider]
model = "claude-3-haiku-20240307"

[budgets.section]
max_tokens = 4000
temperature = 0.5
"#;

    let config: ScrivenerConfig = toml.parse().expect("Valid TOML");
    assert_eq!(config.provider().model(), "claude-3-haiku-20240307");
    assert_eq!(*config.provider().timeout_secs(), 120);
    assert_eq!(*config.budgets().section(), StageBudget::new(4000, 0.5));
    assert_eq!(*config.budgets().outline(), StageBudget::new(2000, 0.7));
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let err = "[provider".parse::<ScrivenerConfig>().unwrap_err();
    assert!(matches!(err.kind(), ConfigErrorKind::Parse(_)));
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[provider]\ntimeout_secs = 30").expect("write");

    let config = ScrivenerConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.provider().timeout_secs(), 30);
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = ScrivenerConfig::from_file(&path).unwrap_err();
    match err.kind() {
        ConfigErrorKind::Read { path: reported, .. } => {
            assert_eq!(reported, &path.display().to_string());
        }
        other => panic!("expected a read error, got {other:?}"),
    }
}
