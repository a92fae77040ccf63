//! Integration tests for configuration file I/O

mod common;

use blade::config::{Config, write_config};

use common::write_temp_config;

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.voice.wake_word = "jarvis".to_string();
    config.recognizer.command = "whisper-stream".to_string();
    config.recognizer.args = vec!["--lang".to_string(), "en".to_string()];
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.voice.wake_word, "jarvis");
    assert_eq!(loaded.recognizer.program(), Some("whisper-stream"));
    assert_eq!(loaded.recognizer.args, vec!["--lang", "en"]);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_load_or_init_creates_defaults_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let created = Config::load_or_init(&path).unwrap();
    assert!(path.exists());
    assert_eq!(created.voice.wake_word, "blade");

    write_config(&path, "[voice]\nwake_word = \"friday\"\n").unwrap();
    let existing = Config::load_or_init(&path).unwrap();
    assert_eq!(existing.voice.wake_word, "friday");
}

#[test]
fn test_invalid_file_reports_path() {
    let (_dir, path) = write_temp_config("[voice\nwake_word = 1");
    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
