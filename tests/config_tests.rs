// File: tests/config_tests.rs
use chore::config::Config;
use chore::context::{AppContext, TestContext};
use chore::storage::LocalStorage;
use std::path::PathBuf;

#[test]
fn test_missing_config_is_an_error_callers_default() {
    let ctx = TestContext::new();
    assert!(Config::load(&ctx).is_err());

    let config = Config::load(&ctx).unwrap_or_default();
    assert!(config.data_file.is_none());
}

#[test]
fn test_config_save_and_load_roundtrip() {
    let ctx = TestContext::new();

    let config = Config {
        data_file: Some(PathBuf::from("/tmp/elsewhere/tasks.txt")),
    };
    config.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(
        loaded.data_file.as_deref(),
        Some(std::path::Path::new("/tmp/elsewhere/tasks.txt"))
    );
}

#[test]
fn test_storage_resolves_default_path() {
    let ctx = TestContext::new();
    let storage = LocalStorage::resolve(&ctx, &Config::default()).unwrap();
    assert_eq!(storage.path(), ctx.get_tasks_file_path().unwrap());
}

#[test]
fn test_storage_honors_data_file_override() {
    let ctx = TestContext::new();
    let override_path = ctx.root.join("custom").join("mine.txt");

    let config = Config {
        data_file: Some(override_path.clone()),
    };
    let storage = LocalStorage::resolve(&ctx, &config).unwrap();
    assert_eq!(storage.path(), override_path);

    // The parent directory is created on first save.
    storage.save_all(&[]).unwrap();
    assert!(override_path.exists());
}
