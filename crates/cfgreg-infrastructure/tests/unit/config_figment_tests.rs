//! Tests for environment overrides through figment
//!
//! Environment variables use the `CFGREG__` prefix and `__` for nesting.
//!
//! # Running These Tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p cfgreg-infrastructure --test unit config_figment -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` blocks for `env::set_var`/`env::remove_var`.
//! Tests MUST run with `--test-threads=1` to prevent data races.

use cfgreg_domain::RuntimeKind;
use cfgreg_infrastructure::config::ConfigLoader;
use std::env;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn missing_file_loader(temp_dir: &tempfile::TempDir) -> ConfigLoader {
    ConfigLoader::new().with_config_path(temp_dir.path().join("missing.toml"))
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_nested_keys() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    set_env("CFGREG__REGISTRY__RUNTIME", "client");
    set_env("CFGREG__LOGGING__LEVEL", "debug");

    let result = missing_file_loader(&temp_dir).load();

    remove_env("CFGREG__REGISTRY__RUNTIME");
    remove_env("CFGREG__LOGGING__LEVEL");

    let config = result.expect("config should load");
    assert_eq!(config.registry.runtime, RuntimeKind::Client);
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("cfgreg.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"error\"\n")
        .expect("Failed to write config file");
    set_env("CFGREG__LOGGING__LEVEL", "trace");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    remove_env("CFGREG__LOGGING__LEVEL");

    assert_eq!(result.expect("config should load").logging.level, "trace");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    set_env("MYAPP__REGISTRY__RUNTIME", "client");
    set_env("CFGREG__REGISTRY__RUNTIME", "server");

    let result = missing_file_loader(&temp_dir)
        .with_env_prefix("MYAPP")
        .load();

    remove_env("MYAPP__REGISTRY__RUNTIME");
    remove_env("CFGREG__REGISTRY__RUNTIME");

    assert_eq!(
        result.expect("config should load").registry.runtime,
        RuntimeKind::Client
    );
}
