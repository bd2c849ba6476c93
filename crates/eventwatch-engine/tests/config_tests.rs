use eventwatch_core::errors::ExErrorKind;
use eventwatch_core::logging_facility::Profile;
use eventwatch_engine::config::WatchConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eventwatch.toml");
    std::fs::write(
        &path,
        r#"
[source]
url = "https://example.test/tournaments"
timeout_secs = 10
user_agent = "listing-monitor/1.0"

[store]
data_dir = "/var/lib/eventwatch"

[retention]
change_log_cap = 250
removed_retention_days = 14

[logging]
profile = "production"
"#,
    )
    .unwrap();

    let config = WatchConfig::load(&path).unwrap();
    assert_eq!(config.source.url.as_deref(), Some("https://example.test/tournaments"));
    assert_eq!(config.source.timeout_secs, 10);
    assert_eq!(config.store.data_dir, PathBuf::from("/var/lib/eventwatch"));
    assert_eq!(config.retention_policy().change_log_cap, 250);
    assert_eq!(config.retention_policy().removed_retention.num_days(), 14);
    assert_eq!(config.logging_profile(), Profile::Production);
}

#[test]
fn test_load_rejects_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eventwatch.toml");
    std::fs::write(&path, "[retention\nchange_log_cap = ").unwrap();

    let err = WatchConfig::load(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = WatchConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eventwatch.toml");
    assert_eq!(WatchConfig::load_or_default(&path), WatchConfig::default());

    std::fs::write(&path, "[retention]\nchange_log_cap = 0\n").unwrap();
    assert_eq!(WatchConfig::load_or_default(&path), WatchConfig::default());
}

#[test]
fn test_save_writes_loadable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("eventwatch.toml");
    let mut config = WatchConfig::default();
    config.source.url = Some("https://example.test/events".to_string());
    config.retention.removed_retention_days = 7;

    config.save(&path).unwrap();

    assert_eq!(WatchConfig::load(&path).unwrap(), config);
}
