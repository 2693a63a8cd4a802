use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::types::{default_items, default_songs, IdStrategy, Item, Song};

const DEFAULT_CONFIG_PATH: &str = "songbook.toml";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub songs: SongServiceConfig,
    pub items: ItemServiceConfig,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from `$SONGBOOK_CONFIG` (or `songbook.toml`) and the
    /// environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("SONGBOOK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from `path`, if it exists, overlaid with
    /// `SONGBOOK_*` environment variables.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SONGBOOK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Reject configurations the servers cannot start with.
    pub fn validate(&self) -> Result<()> {
        if !self.songs.enabled && !self.items.enabled {
            bail!("at least one of songs.enabled or items.enabled must be true");
        }

        if self.songs.enabled && self.items.enabled && self.songs.addr() == self.items.addr() {
            bail!(
                "songs and items services cannot share the address {}",
                self.songs.addr()
            );
        }

        let mut seen = HashSet::new();
        for song in &self.songs.seed {
            if !seen.insert(song.id) {
                bail!("songs.seed contains duplicate id {}", song.id);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SongServiceConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub id_strategy: IdStrategy,
    pub seed: Vec<Song>,
}

impl SongServiceConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SongServiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "0.0.0.0".to_string(),
            port: 8000,
            id_strategy: IdStrategy::default(),
            seed: default_songs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ItemServiceConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    /// Keep serving appends on `GET /item` next to `POST /create`
    pub legacy_get_append: bool,
    pub seed: Vec<Item>,
}

impl ItemServiceConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ItemServiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "0.0.0.0".to_string(),
            port: 8080,
            legacy_get_append: true,
            seed: default_items(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
