//! Loading configuration from disk.

use std::path::PathBuf;

use ganzhi_base::LateZiRule;
use ganzhi_config::{ConfigError, EngineConfig};

fn scratch_file(name: &str, body: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ganzhi_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn load_reads_toml_file() {
    let path = scratch_file(
        "engine.toml",
        "[pillars]\nlate_zi = \"next_day\"\n\n[location]\ndefault_city = \"Tokyo\"\n",
    );
    let c = EngineConfig::load(&path).unwrap();
    assert_eq!(c.pillars.late_zi, LateZiRule::NextDay);
    assert_eq!(c.default_location().name, "Tokyo");
    assert_eq!(c.default_location().utc_offset_minutes, 540);
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("ganzhi_config_does_not_exist.toml");
    match EngineConfig::load(&path) {
        Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn load_validates_contents() {
    let path = scratch_file("bad.toml", "[fortune]\ndaily_window_days = 0\n");
    assert!(matches!(
        EngineConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));
}
