// SPDX-License-Identifier: MPL-2.0
//! This module handles the alert's configuration, including loading and saving
//! appearance and animation preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[appearance]` - Separator and backdrop colors (`#rrggbb` or `#rrggbbaa`)
//! - `[animation]` - Dismiss transition duration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Set `ICED_ALERT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_alert::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the dismiss transition down
//! config.animation.dismiss_duration_ms = Some(400);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAlert";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_ALERT_CONFIG_DIR";

// =============================================================================
// Hex Colors
// =============================================================================

/// A color stored as `#rrggbb` or `#rrggbbaa` in the settings file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexColor(pub Color);

impl HexColor {
    /// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim().trim_start_matches('#');
        let is_hex = digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !matches!(digits.len(), 6 | 8) || !is_hex {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if digits.len() == 8 { channel(6)? } else { u8::MAX };

        Some(Self(Color::from_rgba8(r, g, b, f32::from(a) / 255.0)))
    }

    /// Formats the color as `#rrggbbaa`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0.into_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid color: {raw}")))
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Colors of the alert chrome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Color showing through the gaps between action buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator_color: Option<HexColor>,

    /// Dim layer drawn behind the popup card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_color: Option<HexColor>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            separator_color: Some(HexColor(palette::SEPARATOR)),
            backdrop_color: Some(HexColor(palette::BACKDROP)),
        }
    }
}

/// Dismiss transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Duration of the shrink-and-fade transition (milliseconds).
    #[serde(
        default = "default_dismiss_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_duration_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            dismiss_duration_ms: default_dismiss_duration_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Alert configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Chrome colors.
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Dismiss transition settings.
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Separator color, falling back to the design token.
    #[must_use]
    pub fn separator_color(&self) -> Color {
        self.appearance
            .separator_color
            .map_or(palette::SEPARATOR, |c| c.0)
    }

    /// Backdrop color, falling back to the design token.
    #[must_use]
    pub fn backdrop_color(&self) -> Color {
        self.appearance
            .backdrop_color
            .map_or(palette::BACKDROP, |c| c.0)
    }

    /// Dismiss duration, clamped to the supported range.
    #[must_use]
    pub fn dismiss_duration(&self) -> Duration {
        let ms = self
            .animation
            .dismiss_duration_ms
            .unwrap_or(DEFAULT_DISMISS_DURATION_MS)
            .clamp(MIN_DISMISS_DURATION_MS, MAX_DISMISS_DURATION_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_dismiss_duration_ms() -> Option<u64> {
    Some(DEFAULT_DISMISS_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the override and the environment.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

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
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
