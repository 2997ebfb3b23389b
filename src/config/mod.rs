// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml`
//! file. The file is read once at startup and never written.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[rotation]` - Drag sensitivity and frame set shape
//! - `[assets]` - Asset root directory
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `TURNTABLE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_turntable::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let sensitivity = config.rotation.sensitivity();
//! println!("dragging at sensitivity {}", sensitivity.value());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{FrameSet, InvalidFrameSet, Sensitivity};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Turntable rotation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RotationConfig {
    /// Drag sensitivity. Higher values step through frames faster.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: Option<f32>,

    /// Number of frames in every variant.
    #[serde(default = "default_frame_count")]
    pub frame_count: Option<usize>,

    /// File extension of rotation frames.
    #[serde(default)]
    pub extension: Option<String>,

    /// File extension of the static cockpit image.
    #[serde(default)]
    pub static_extension: Option<String>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            frame_count: default_frame_count(),
            extension: None,
            static_extension: None,
        }
    }
}

impl RotationConfig {
    /// Effective sensitivity, clamped into the supported range.
    #[must_use]
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
            .map_or(Sensitivity::DEFAULT, Sensitivity::clamped)
    }

    /// Effective frame count, capped at [`MAX_FRAME_COUNT`].
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
            .unwrap_or(DEFAULT_FRAME_COUNT)
            .min(MAX_FRAME_COUNT)
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(DEFAULT_FRAME_EXTENSION)
    }

    #[must_use]
    pub fn static_extension(&self) -> &str {
        self.static_extension
            .as_deref()
            .unwrap_or(DEFAULT_STATIC_EXTENSION)
    }

    /// Builds the frame set of a variant rooted at `base_path`.
    ///
    /// # Errors
    ///
    /// Fails when `base_path` or a configured extension is empty.
    pub fn frame_set(&self, base_path: impl Into<String>) -> std::result::Result<FrameSet, InvalidFrameSet> {
        FrameSet::with_extensions(
            base_path,
            self.frame_count(),
            self.extension(),
            self.static_extension(),
        )
    }
}

/// Asset location settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct AssetsConfig {
    /// Directory holding one sub-directory of frames per variant.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl AssetsConfig {
    /// Effective asset root.
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub rotation: RotationConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_sensitivity() -> Option<f32> {
    Some(DEFAULT_SENSITIVITY)
}

fn default_frame_count() -> Option<usize> {
    Some(DEFAULT_FRAME_COUNT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

// =============================================================================
// Tests
// =============================================================================
