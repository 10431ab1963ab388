use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::NavError;
use crate::result::NavResult;

const DEFAULT_TICK_RATE_MS: u64 = 16;
const DEFAULT_HIGHLIGHT_SYMBOL: &str = "> ";
const DEFAULT_EMPTY_MESSAGE: &str = "(no items)";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenavConfig {
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
    #[serde(default)]
    pub highlight_symbol: Option<String>,
    #[serde(default)]
    pub empty_message: Option<String>,
}

impl FilenavConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/filenav/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("filenav/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("filenav\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config path, falling back to defaults.
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> NavResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> NavResult<Self> {
        toml::from_str(content).map_err(|e| NavError::Config(e.to_string()))
    }

    pub fn effective_tick_rate_ms(&self) -> u64 {
        match self.tick_rate_ms {
            Some(0) | None => DEFAULT_TICK_RATE_MS,
            Some(ms) => ms,
        }
    }

    pub fn effective_highlight_symbol(&self) -> &str {
        self.highlight_symbol
            .as_deref()
            .unwrap_or(DEFAULT_HIGHLIGHT_SYMBOL)
    }

    pub fn effective_empty_message(&self) -> &str {
        self.empty_message.as_deref().unwrap_or(DEFAULT_EMPTY_MESSAGE)
    }
}
