//! Integration tests for soundtap-config.
//!
//! These tests verify file round trips and that loaded configurations build
//! histories that ingest samples the way the file describes.

use soundtap_config::{ConfigError, HistoryConfig};
use soundtap_core::InputMode;
use tempfile::TempDir;

#[test]
fn save_creates_parent_dirs_and_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("history.toml");

    let config = HistoryConfig::new(1024)
        .with_input_mode(InputMode::Right)
        .with_prefill(true);
    config.save(&path).expect("should save config");

    assert!(path.exists());
    let loaded = HistoryConfig::load(&path).expect("should load config");
    assert_eq!(loaded, config);
}

#[test]
fn load_missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let err = HistoryConfig::load(&path).unwrap_err();
    match err {
        ConfigError::ReadFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ReadFile, got {other:?}"),
    }
}

#[test]
fn load_malformed_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "capacity = [").unwrap();

    assert!(matches!(
        HistoryConfig::load(&path),
        Err(ConfigError::TomlParse(_))
    ));
}

#[test]
fn loaded_stereo_config_splits_channels() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stereo.toml");
    std::fs::write(&path, "capacity = 2\ninput_mode = \"STEREO\"\n").unwrap();

    let mut history = HistoryConfig::load(&path).unwrap().build().unwrap();
    history.put_samples(&mut [1.0, 2.0, 3.0, 4.0], 2);

    assert_eq!(history.left().to_vec(), vec![1.0, 3.0]);
    assert_eq!(history.right().to_vec(), vec![2.0, 4.0]);
    assert_eq!(history.num_put_samples(), 2);
}

#[test]
fn unknown_mode_in_file_builds_mono_history() {
    let config = HistoryConfig::from_toml("capacity = 4\ninput_mode = \"7.1\"\n").unwrap();
    let mut history = config.build().unwrap();
    assert_eq!(history.input_type(), "Mono");

    history.put_samples(&mut [1.0, 3.0], 2);
    assert_eq!(history.at(0), 2.0);
}

#[test]
fn prefill_flag_controls_initial_window() {
    let empty = HistoryConfig::new(16).build().unwrap();
    assert!(empty.is_empty());

    let filled = HistoryConfig::new(16).with_prefill(true).build().unwrap();
    assert_eq!(filled.len(), 16);
    assert!(filled.left().iter().all(|s| s == 0.0));
}
