//! Configuration management for partyplay
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, COUNTDOWN_DEFAULT_SECONDS, COUNTDOWN_MAX_SECONDS, COUNTDOWN_MIN_SECONDS, DEFAULT_SERVER_URL,
    RESERVED_KEYS, SHAKE_DEFAULT_KEY, SHAKE_DEFAULT_PRESSES, SHAKE_DEFAULT_WINDOW_MS, SHAKE_MAX_PRESSES, SHAKE_MAX_WINDOW_MS,
    SHAKE_MIN_PRESSES, SHAKE_MIN_WINDOW_MS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Server connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// WebSocket URL of the game server
    pub url: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Countdown length used when an instruction carries no `time`
    pub default_countdown_seconds: u32,
    /// Key that counts as one shake movement
    pub shake_key: String,
    /// Presses of `shake_key` needed inside the window to register a shake
    pub shake_presses: u32,
    /// Window in milliseconds for the shake presses
    pub shake_window_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Mirror logs to a file
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_countdown_seconds: COUNTDOWN_DEFAULT_SECONDS,
            shake_key: SHAKE_DEFAULT_KEY.to_string(),
            shake_presses: SHAKE_DEFAULT_PRESSES,
            shake_window_ms: SHAKE_DEFAULT_WINDOW_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// The shake key as a single character
    pub fn shake_key_char(&self) -> Option<char> {
        let mut chars = self.shake_key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    pub fn shake_window(&self) -> Duration {
        Duration::from_millis(self.shake_window_ms)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("partyplay.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("partyplay").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = &self.server.url;
        if !(url.starts_with("ws://") || url.starts_with("wss://")) {
            anyhow::bail!("server.url must start with ws:// or wss://, got '{}'", url);
        }

        let seconds = self.ui.default_countdown_seconds;
        if !(COUNTDOWN_MIN_SECONDS..=COUNTDOWN_MAX_SECONDS).contains(&seconds) {
            anyhow::bail!(
                "default_countdown_seconds must be between {} and {}, got {}",
                COUNTDOWN_MIN_SECONDS,
                COUNTDOWN_MAX_SECONDS,
                seconds
            );
        }

        match self.ui.shake_key_char() {
            Some(key) if RESERVED_KEYS.contains(&key) => anyhow::bail!("shake_key '{}' is reserved", key),
            Some(_) => {}
            None => anyhow::bail!("shake_key must be a single character, got '{}'", self.ui.shake_key),
        }

        if !(SHAKE_MIN_PRESSES..=SHAKE_MAX_PRESSES).contains(&self.ui.shake_presses) {
            anyhow::bail!(
                "shake_presses must be between {} and {}, got {}",
                SHAKE_MIN_PRESSES,
                SHAKE_MAX_PRESSES,
                self.ui.shake_presses
            );
        }

        if !(SHAKE_MIN_WINDOW_MS..=SHAKE_MAX_WINDOW_MS).contains(&self.ui.shake_window_ms) {
            anyhow::bail!(
                "shake_window_ms must be between {} and {}, got {}",
                SHAKE_MIN_WINDOW_MS,
                SHAKE_MAX_WINDOW_MS,
                self.ui.shake_window_ms
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# partyplay configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("partyplay"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
