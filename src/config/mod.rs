// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[player]` - Media source, initial volume/mute/rate, progress cadence
//! - `[transport]` - Rewind / fast-forward distance
//! - `[controls]` - Overlay auto-hide threshold
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.player.source = Some("/videos/talk.mp4".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Embedded player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// File path or URL opened when no source is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Initial volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Whether the player starts muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// Initial playback rate; must be one of the rates offered by the menu.
    #[serde(
        default = "default_playback_rate",
        skip_serializing_if = "Option::is_none"
    )]
    pub playback_rate: Option<f64>,

    /// Interval between progress reports in milliseconds.
    #[serde(
        default = "default_progress_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_interval_ms: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            source: None,
            volume: default_volume(),
            muted: Some(false),
            playback_rate: default_playback_rate(),
            progress_interval_ms: default_progress_interval_ms(),
        }
    }
}

impl PlayerConfig {
    /// Progress interval with the lower bound applied.
    #[must_use]
    pub fn progress_interval(&self) -> Duration {
        let ms = self
            .progress_interval_ms
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS)
            .max(MIN_PROGRESS_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

/// Transport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportConfig {
    /// Rewind / fast-forward distance in seconds.
    #[serde(
        default = "default_skip_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_step_secs: Option<f64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            skip_step_secs: default_skip_step_secs(),
        }
    }
}

/// Overlay control bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Idle progress ticks tolerated before the controls hide.
    #[serde(default = "default_idle_ticks", skip_serializing_if = "Option::is_none")]
    pub idle_ticks: Option<u32>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            idle_ticks: default_idle_ticks(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub controls: ControlsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_playback_rate() -> Option<f64> {
    Some(DEFAULT_PLAYBACK_RATE)
}

fn default_progress_interval_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_INTERVAL_MS)
}

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_idle_ticks() -> Option<u32> {
    Some(DEFAULT_IDLE_TICKS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
