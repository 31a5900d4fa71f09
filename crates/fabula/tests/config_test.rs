//! Tests for layered configuration.

use fabula::{ConfigAccessor, ExtensionRegistry, FabulaConfig};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_overrides_bundled_defaults() {
    let file = write_config(
        r#"
[story]
locale = "de-DE"

[extensions.session]
max_turns = 3
"#,
    );

    let config = FabulaConfig::from_file(file.path()).unwrap();

    assert_eq!(config.story().locale(), "de-DE");
    assert_eq!(config.logging().level(), "info");
    assert_eq!(
        config.accessor().get_u64("extensions.session.max_turns").unwrap(),
        Some(3)
    );
}

#[test]
fn test_logging_section() {
    let file = write_config("[logging]\nlevel = \"fabula_verify=debug\"\njson = true\n");
    let config = FabulaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.logging().level(), "fabula_verify=debug");
    assert!(*config.logging().json());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = FabulaConfig::from_file(dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_config_drives_registry_construction() {
    let file = write_config("[story]\nlocale = \"it-IT\"\n");
    let config = FabulaConfig::from_file(file.path()).unwrap();

    let registry = ExtensionRegistry::new(&config.loader_parameter()).unwrap();
    assert_eq!(registry.locale(), "it-IT");
}

#[test]
fn test_invalid_extension_setting_fails_construction() {
    let file = write_config("[extensions.session]\nmax_turns = 0\n");
    let config = FabulaConfig::from_file(file.path()).unwrap();

    assert!(ExtensionRegistry::new(&config.loader_parameter()).is_err());
}
