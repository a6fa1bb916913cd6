use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::api::ClientSettings;
use crate::formatting::BoxChars;
use crate::roster::DEFAULT_TOP_SCORER_LIMIT;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub api_base_url: String,
    /// Prepended to every request URL when set
    pub proxy_prefix: Option<String>,
    pub request_timeout_secs: u64,
    pub top_scorer_limit: usize,
    pub time_format: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            proxy_prefix: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            top_scorer_limit: DEFAULT_TOP_SCORER_LIMIT,
            time_format: "%I:%M %p".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl Config {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_base_url.clone(),
            proxy_prefix: self.proxy_prefix.clone().filter(|p| !p.is_empty()),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Parse TOML and derive the box characters from `use_unicode`
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
        Ok(config)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Load a config file. A missing file yields the defaults.
pub fn read_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config {}", config_path.display()))?;

    Config::from_toml(&content)
        .with_context(|| format!("Invalid config {}", config_path.display()))
}

/// Runs before logging is set up, so problems are reported on stderr
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    read_from(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: {:#}; using defaults", e);
        Config::default()
    })
}
