//! Client configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default game server address.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default identifier sent as `player_id`.
pub const DEFAULT_PLAYER_ID: &str = "player";

/// Environment variable overriding the server address.
pub const API_URL_ENV: &str = "TTT_API_URL";

/// Environment variable overriding the player identifier.
pub const PLAYER_ID_ENV: &str = "TTT_PLAYER_ID";

/// Settings injected into the client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the game server (e.g. `http://localhost:3000`).
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    /// Identifier the server records for the local player.
    #[serde(default = "default_player_id")]
    player_id: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_player_id() -> String {
    DEFAULT_PLAYER_ID.to_string()
}

impl ClientConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(api_base_url: String, player_id: String) -> Self {
        Self {
            api_base_url,
            player_id,
        }
    }

    /// Loads configuration from TOML file.
    ///
    /// Missing keys fall back to the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(api_base_url = %config.api_base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Applies `TTT_API_URL` and `TTT_PLAYER_ID` from the process environment.
    #[instrument(skip(self))]
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable source.
    ///
    /// Empty values are rejected rather than silently ignored.
    #[instrument(skip(self, lookup))]
    pub fn with_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV) {
            if url.trim().is_empty() {
                return Err(ConfigError::new(format!("{} is set but empty", API_URL_ENV)));
            }
            debug!(api_base_url = %url, "Using server address from environment");
            self.api_base_url = url;
        }
        if let Some(player_id) = lookup(PLAYER_ID_ENV) {
            if player_id.trim().is_empty() {
                return Err(ConfigError::new(format!("{} is set but empty", PLAYER_ID_ENV)));
            }
            self.player_id = player_id;
        }
        Ok(self)
    }

    /// Replaces the server address.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Replaces the player identifier.
    pub fn with_player_id(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = player_id.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_api_base_url(), default_player_id())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
