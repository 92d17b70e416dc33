//! Configuration file handling for symbol-art.
//!
//! Loads configuration from `~/.config/symbol-art/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image converted when neither the command line nor the config names one.
pub const DEFAULT_SOURCE_URL: &str = "https://imgur.com/6cf1KE0";

/// Contents written by `symbol-art config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# symbol-art configuration

[source]
# Image to convert when none is given on the command line
url = "https://imgur.com/6cf1KE0"

[render]
# Gray level (0-255) at or below which a pixel is dark
threshold = 200
# Rotate the output by 90 degrees
turn = false
# Symbol preset: emoji, blocks, ascii
preset = "emoji"
# Override the preset's symbols
# light_symbols = "🍀😀"
# dark_symbols = "🐳🐬🐋🐟"

[output]
# Output format: text, html
format = "text"
# HTML font metrics in points
font_size = 12
line_height = 16

[acquire]
# Host serving direct imgur image files
image_host = "https://i.imgur.com"
# Retries for transient network errors
network_retries = 3
# Request timeout in seconds
timeout_secs = 30
"#;

/// Configuration file structure for symbol-art.
/// Loaded from ~/.config/symbol-art/config.toml (or custom path via --config).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub acquire: AcquireConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct SourceConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct RenderConfig {
    pub threshold: Option<i64>,
    #[serde(default)]
    pub turn: bool,
    pub preset: Option<String>,
    pub light_symbols: Option<String>,
    pub dark_symbols: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub font_size: Option<u32>,
    pub line_height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct AcquireConfig {
    pub image_host: Option<String>,
    pub network_retries: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Config file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("symbol-art").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/symbol-art/config.toml")
        })
}
