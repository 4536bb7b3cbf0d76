//! Application settings persistence
//!
//! Handles saving and loading user preferences. The sound-bars widget itself
//! keeps no persistent state; only host-side choices live here.

use std::path::{Path, PathBuf};

use iced::{Color, color};
use serde::{Deserialize, Serialize};

/// Named fill colors offered by the host's swatch row.
///
/// The widget accepts any raw [`Color`]; this enum just gives the host a
/// serializable palette to persist and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    /// Classic level-indicator green
    #[default]
    Green,
    /// Neon pink
    Pink,
    /// Dodger blue
    Blue,
    /// Warm amber
    Amber,
}

impl BarColor {
    /// Get all swatch choices in display order
    pub fn all() -> &'static [BarColor] {
        &[
            BarColor::Green,
            BarColor::Pink,
            BarColor::Blue,
            BarColor::Amber,
        ]
    }

    /// The fill color this choice stands for
    pub fn color(&self) -> Color {
        match self {
            BarColor::Green => color!(0x00ff00),
            BarColor::Pink => color!(0xff1493),
            BarColor::Blue => color!(0x1e90ff),
            BarColor::Amber => color!(0xffbf00),
        }
    }

    /// Get display name for this choice
    pub fn display_name(&self) -> &'static str {
        match self {
            BarColor::Green => "Green",
            BarColor::Pink => "Pink",
            BarColor::Blue => "Blue",
            BarColor::Amber => "Amber",
        }
    }
}

impl std::fmt::Display for BarColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub appearance: AppearanceSettings,
    /// Widget settings
    #[serde(default)]
    pub bars: BarSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceSettings {
    /// Dark mode enabled
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

/// Widget settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BarSettings {
    /// Fill color for the bars
    #[serde(default)]
    pub color: BarColor,
}

fn default_true() -> bool {
    true
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "soundbars", "SoundBars")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
