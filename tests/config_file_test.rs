use std::io::Write;

use songbook::config::{AppConfig, LogFormat};
use songbook::types::{IdStrategy, Item, Song};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.songs.port, 8000);
    assert_eq!(config.items.port, 8080);
    assert_eq!(config.songs.id_strategy, IdStrategy::Monotonic);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn file_overrides_selected_fields() {
    let file = write_config(
        r#"
[songs]
port = 9100
id_strategy = "length"

[items]
legacy_get_append = false

[logging]
format = "json"
"#,
    );

    let config = AppConfig::load_from(file.path()).unwrap();

    assert_eq!(config.songs.port, 9100);
    assert_eq!(config.songs.host, "0.0.0.0");
    assert_eq!(config.songs.id_strategy, IdStrategy::Length);
    assert_eq!(config.songs.seed.len(), 3);
    assert!(!config.items.legacy_get_append);
    assert_eq!(config.items.port, 8080);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.validate().is_ok());
}

#[test]
fn seeds_can_be_replaced() {
    let file = write_config(
        r#"
[songs]
seed = [
  { id = 10, title = "Intro", artist = "Opening Act" },
]

[items]
seed = []
"#,
    );

    let config = AppConfig::load_from(file.path()).unwrap();

    assert_eq!(config.songs.seed, vec![Song::new(10, "Intro", "Opening Act")]);
    assert_eq!(config.items.seed, Vec::<Item>::new());
}

#[test]
fn unknown_id_strategy_fails_to_load() {
    let file = write_config(
        r#"
[songs]
id_strategy = "random"
"#,
    );

    assert!(AppConfig::load_from(file.path()).is_err());
}
