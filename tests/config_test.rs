// tests/config_test.rs
use release_bump::config::{load_config, Config, StagingBackend, LOCAL_CONFIG_FILE};
use release_bump::sync::PatternKind;
use serial_test::serial;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
root = "/srv/project"

[source]
path = "lib/version.rb"

[[manifests]]
path = "package.json"

[staging]
program = "/usr/local/bin/git"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.root, Some(PathBuf::from("/srv/project")));
    assert_eq!(config.source.path, PathBuf::from("lib/version.rb"));
    assert_eq!(config.source.kind, PatternKind::Source);
    assert_eq!(config.manifests.len(), 1);
    assert_eq!(config.staging.program, "/usr/local/bin/git");
    assert!(config.staging.enabled);
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some(Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/releasebump.toml"
    ))))
    .expect("Failed to load test config");
    assert_eq!(config.source.path, PathBuf::from("src/version.ts"));
    assert_eq!(
        config.manifests.iter().map(|m| m.kind).collect::<Vec<_>>(),
        vec![PatternKind::Json, PatternKind::Json]
    );
    assert!(!config.staging.enabled);
    assert_eq!(config.staging.backend, StagingBackend::Git2);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[source\npath = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_local_config_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[source]\npath = \"VERSION.ts\"\n",
    )
    .unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    let root = config
        .as_ref()
        .map(|c| c.resolve_root(None))
        .expect("Should load local config");
    std::env::set_current_dir(original_dir).unwrap();

    let config = config.unwrap();
    assert_eq!(config.source.path, PathBuf::from("VERSION.ts"));
    assert_eq!(
        root.unwrap().canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn test_default_config_round_trips_through_toml() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(Config::from_toml(&text).unwrap(), config);
}
