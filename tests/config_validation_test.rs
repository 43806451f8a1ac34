use album_store::config::{AppConfig, LogFormat, ServerConfig, StoreSection};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

const ENV_KEYS: [&str; 5] = [
    "ALBUMS_SERVER_HOST",
    "ALBUMS_SERVER_PORT",
    "ALBUMS_STORE_SEED",
    "ALBUMS_LOGGING_LEVEL",
    "ALBUMS_LOGGING_FORMAT",
];

/// Serialises tests that read or write `ALBUMS_*` variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Take the env lock and clear any `ALBUMS_*` overrides inherited from the
/// surrounding environment.
fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    guard
}

fn write_config(path: &Path, contents: &str) {
    let mut file = std::fs::File::create(path).unwrap();
    writeln!(file, "{contents}").unwrap();
}

#[test]
fn defaults_bind_port_3333_with_seed() {
    let config = AppConfig::default();

    assert_eq!(config.bind_addr(), "0.0.0.0:3333");
    assert!(config.store.seed);
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn zero_port_is_rejected() {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        ..Default::default()
    };

    assert!(
        config.validate().is_err(),
        "Expected port 0 to fail validation"
    );
}

#[tokio::test]
async fn unseeded_store_starts_empty() {
    let config = AppConfig {
        store: StoreSection { seed: false },
        ..Default::default()
    };

    assert!(config.build_store().is_empty().await);
    assert_eq!(AppConfig::default().build_store().len().await, 3);
}

#[test]
fn loads_settings_from_toml_file() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("albums.toml");
    write_config(
        &path,
        "[server]\nhost = \"127.0.0.1\"\nport = 8080\n\n[store]\nseed = false\n\n[logging]\nlevel = \"\"\nformat = \"json\"",
    );

    let config = AppConfig::load_from(&path).expect("file configuration should be valid");

    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    assert!(!config.store.seed);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.server.port, 3333);
}

#[test]
fn environment_overrides_toml_file() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("albums.toml");
    write_config(
        &path,
        "[server]\nhost = \"127.0.0.1\"\nport = 4000\n\n[store]\nseed = true",
    );

    std::env::set_var("ALBUMS_SERVER_PORT", "8080");
    std::env::set_var("ALBUMS_STORE_SEED", "false");
    std::env::set_var("ALBUMS_LOGGING_FORMAT", "json");

    let result = AppConfig::load_from(&path);

    for key in ENV_KEYS {
        std::env::remove_var(key);
    }

    let config = result.expect("environment overrides should be valid");
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    assert!(!config.store.seed);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn zero_port_from_environment_is_rejected() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();

    std::env::set_var("ALBUMS_SERVER_PORT", "0");
    let result = AppConfig::load_from(dir.path().join("absent.toml"));
    std::env::remove_var("ALBUMS_SERVER_PORT");

    assert!(result.is_err(), "Expected ALBUMS_SERVER_PORT=0 to fail validation");
}
