//! Configuration types for lei-search.
//!
//! [`Config::load`] reads `~/.config/lei-search/config.toml`, creating it with
//! the built-in defaults if it does not yet exist. [`Config::load_from`] reads
//! an explicit file instead. [`Config::defaults`] returns the defaults without
//! touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
source = "data/Latinismi.tsv"

[links]
base_url = "https://stampa.lei-digitale.it/volumes/"
sector   = "germanismi"

[render]
max_cell_chars = 100

[ui]
theme = "default"

[server]
bind = "127.0.0.1:8080"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[data]` section: where the TSV dataset comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// File path, or an `http://` URL.
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String { "data/Latinismi.tsv".to_string() }

impl Default for DataConfig {
    fn default() -> Self {
        Self { source: default_source() }
    }
}

/// `[links]` section: the per-row deep link target.
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_sector")]
    pub sector: String,
}

fn default_base_url() -> String { "https://stampa.lei-digitale.it/volumes/".to_string() }
fn default_sector() -> String { "germanismi".to_string() }

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sector: default_sector(),
        }
    }
}

/// `[render]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Cells longer than this collapse behind a summary.
    #[serde(default = "default_max_cell_chars")]
    pub max_cell_chars: usize,
}

fn default_max_cell_chars() -> usize { 100 }

impl Default for RenderConfig {
    fn default() -> Self {
        Self { max_cell_chars: default_max_cell_chars() }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: default_theme() }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8080".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/lei-search/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file layered on top of the built-in defaults.
    ///
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Parse a TOML string layered on top of the built-in defaults.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("lei-search")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
