//! Configuration module for WaveView
//!
//! Persists UI preferences (theme mode, language) across sessions. Model
//! state — the imported-file list and the current waveform — is in-memory
//! only and is deliberately not persisted.
//!
//! # App Data Location
//!
//! - **Linux**: `~/.local/share/dev.waveview.waveview-rs/`
//! - **macOS**: `~/Library/Application Support/dev.waveview.waveview-rs/`
//! - **Windows**: `%APPDATA%\dev.waveview.waveview-rs\`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, WaveViewError};
use crate::i18n::Language;
use crate::types::ThemeMode;

/// Application identifier for data directories
pub const APP_ID: &str = "dev.waveview.waveview-rs";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        WaveViewError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            WaveViewError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default)]
    pub language: Language,
}

/// Persistent application state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            WaveViewError::Config("Could not determine app state path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| WaveViewError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| WaveViewError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        let path = dir.join(APP_STATE_FILE);

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| WaveViewError::Config(format!("Failed to serialize app state: {}", e)))?;

        std::fs::write(&path, content)
            .map_err(|e| WaveViewError::Config(format!("Failed to write app state: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!(state.version, 1);
        assert_eq!(state.ui_preferences.theme, ThemeMode::System);
        assert_eq!(state.ui_preferences.language, Language::English);
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = AppState {
            version: 1,
            ui_preferences: UiPreferences {
                theme: ThemeMode::Dark,
                language: Language::SimplifiedChinese,
            },
        };

        let json = serde_json::to_string(&state).unwrap();
        let restored: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ui_preferences, state.ui_preferences);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let restored: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.version, 1);
        assert_eq!(restored.ui_preferences, UiPreferences::default());
    }
}
