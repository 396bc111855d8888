//! TOML-based application configuration.
//!
//! Stores player profile overrides applied on top of the seed user when
//! a session is provisioned. Game state itself is never persisted; only
//! these preferences survive a restart.
//!
//! Configuration is stored at `~/.config/ecoquest/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::user::User;

/// Returns `~/.config/ecoquest[-dev]/` based on ECOQUEST_ENV.
///
/// Set ECOQUEST_ENV=dev to use the development config directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ECOQUEST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("ecoquest-dev")
    } else {
        base_dir.join("ecoquest")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
    Ok(dir)
}

/// Player profile overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    #[serde(default = "default_player_name")]
    pub name: String,
    #[serde(default = "default_grade")]
    pub grade: String,
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ecoquest/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
}

// Default functions
fn default_player_name() -> String {
    "Eco Warrior".into()
}
fn default_grade() -> String {
    "10th".into()
}
fn default_group() -> String {
    "Green High School".into()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: default_player_name(),
            grade: default_grade(),
            group: default_group(),
            interests: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path (missing file yields defaults).
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Build the initial player record: the seed user with the
    /// configured profile overrides applied.
    pub fn seed_user(&self) -> User {
        let mut user = User::seed();
        user.name = self.player.name.clone();
        user.grade = self.player.grade.clone();
        user.group = self.player.group.clone();
        user.interests = self.player.interests.clone();
        user
    }
}
