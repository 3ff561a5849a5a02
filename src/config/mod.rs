// SPDX-License-Identifier: MPL-2.0
//! This module handles the header's configuration, including loading and saving
//! it to a `header.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[layout]` - Layout mode, band height, notch threshold and paddings
//! - `[close]`, `[delete]`, `[share]`, `[page_indicator]` - One section per control
//! - `[appearance]` - Header background
//!
//! A header reads its configuration once, when it is built. Changing a
//! `HeaderConfig` afterwards has no effect on headers that already exist.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LENS_HEADER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lens_header::config::{self, HeaderConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Enable the delete button
//! config.delete.enabled = Some(true);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::header::ControlRole;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "header.toml";

// =============================================================================
// Enums
// =============================================================================

/// Which control wins when the delete control and the page indicator are
/// both enabled. They share the same center point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CenterConflict {
    #[default]
    PreferPageIndicator,
    PreferDelete,
}

// =============================================================================
// Control Styling
// =============================================================================

/// Text attributes of a control label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    #[serde(default = "default_text_size")]
    pub size: f32,

    /// Text color as `#rrggbb` or `#rrggbbaa`.
    #[serde(default = "default_text_color")]
    pub color: String,

    #[serde(default)]
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_BUTTON_TEXT_SIZE,
            color: DEFAULT_BUTTON_TEXT_COLOR.to_string(),
            bold: false,
        }
    }
}

/// Explicit control size, overriding the size of its content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ControlSize {
    pub width: f32,
    pub height: f32,
}

/// SVG icon shown instead of the text label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconSpec {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Settings of a single control.
///
/// Unset fields fall back to the defaults of the control's role when the
/// header is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ControlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ControlSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSpec>,
}

impl ControlConfig {
    /// Fills every unset field from the defaults of `role`.
    #[must_use]
    pub fn or_role_defaults(&self, role: ControlRole) -> Self {
        let fallback = role_defaults(role);
        Self {
            enabled: self.enabled.or(fallback.enabled),
            text: self.text.clone().or(fallback.text),
            text_style: self.text_style.clone().or(fallback.text_style),
            size: self.size.or(fallback.size),
            icon: self.icon.clone().or(fallback.icon),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Use the unpadded top-aligned bar instead of the safe-area band.
    #[serde(default)]
    pub legacy_layout: bool,

    #[serde(default = "default_band_height")]
    pub band_height: f32,

    #[serde(default = "default_notch_threshold")]
    pub notch_threshold: f32,

    #[serde(default = "default_portrait_padding")]
    pub portrait_padding: f32,

    #[serde(default = "default_landscape_padding")]
    pub landscape_padding: f32,

    #[serde(default = "default_legacy_side_padding")]
    pub legacy_side_padding: f32,

    #[serde(default)]
    pub center_conflict: CenterConflict,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            legacy_layout: false,
            band_height: DEFAULT_BAND_HEIGHT,
            notch_threshold: DEFAULT_NOTCH_THRESHOLD,
            portrait_padding: DEFAULT_PORTRAIT_PADDING,
            landscape_padding: DEFAULT_LANDSCAPE_PADDING,
            legacy_side_padding: DEFAULT_LEGACY_SIDE_PADDING,
            center_conflict: CenterConflict::default(),
        }
    }
}

/// Header background settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    #[serde(default = "default_background_alpha")]
    pub background_alpha: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background_alpha: DEFAULT_BACKGROUND_ALPHA,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Header configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderConfig {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default = "default_close")]
    pub close: ControlConfig,

    #[serde(default = "default_delete")]
    pub delete: ControlConfig,

    #[serde(default = "default_share")]
    pub share: ControlConfig,

    #[serde(default = "default_page_indicator")]
    pub page_indicator: ControlConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            close: default_close(),
            delete: default_delete(),
            share: default_share(),
            page_indicator: default_page_indicator(),
            appearance: AppearanceConfig::default(),
        }
    }
}

impl HeaderConfig {
    /// Returns the section configuring `role`.
    #[must_use]
    pub fn control(&self, role: ControlRole) -> &ControlConfig {
        match role {
            ControlRole::Close => &self.close,
            ControlRole::Delete => &self.delete,
            ControlRole::Share => &self.share,
            ControlRole::PageIndicator => &self.page_indicator,
        }
    }

    /// Mutable access to the section configuring `role`.
    pub fn control_mut(&mut self, role: ControlRole) -> &mut ControlConfig {
        match role {
            ControlRole::Close => &mut self.close,
            ControlRole::Delete => &mut self.delete,
            ControlRole::Share => &mut self.share,
            ControlRole::PageIndicator => &mut self.page_indicator,
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_text_size() -> f32 {
    DEFAULT_BUTTON_TEXT_SIZE
}

fn default_text_color() -> String {
    DEFAULT_BUTTON_TEXT_COLOR.to_string()
}

fn default_band_height() -> f32 {
    DEFAULT_BAND_HEIGHT
}

fn default_notch_threshold() -> f32 {
    DEFAULT_NOTCH_THRESHOLD
}

fn default_portrait_padding() -> f32 {
    DEFAULT_PORTRAIT_PADDING
}

fn default_landscape_padding() -> f32 {
    DEFAULT_LANDSCAPE_PADDING
}

fn default_legacy_side_padding() -> f32 {
    DEFAULT_LEGACY_SIDE_PADDING
}

fn default_background_alpha() -> f32 {
    DEFAULT_BACKGROUND_ALPHA
}

fn button_section(enabled: bool, text: &str, color: &str) -> ControlConfig {
    ControlConfig {
        enabled: Some(enabled),
        text: Some(text.to_string()),
        text_style: Some(TextStyle {
            size: DEFAULT_BUTTON_TEXT_SIZE,
            color: color.to_string(),
            bold: true,
        }),
        size: None,
        icon: None,
    }
}

fn default_close() -> ControlConfig {
    button_section(true, DEFAULT_CLOSE_TEXT, DEFAULT_BUTTON_TEXT_COLOR)
}

fn default_delete() -> ControlConfig {
    button_section(false, DEFAULT_DELETE_TEXT, DEFAULT_DELETE_TEXT_COLOR)
}

fn default_share() -> ControlConfig {
    button_section(false, DEFAULT_SHARE_TEXT, DEFAULT_BUTTON_TEXT_COLOR)
}

/// Section used for `role` when the file leaves it out.
#[must_use]
pub fn role_defaults(role: ControlRole) -> ControlConfig {
    match role {
        ControlRole::Close => default_close(),
        ControlRole::Delete => default_delete(),
        ControlRole::Share => default_share(),
        ControlRole::PageIndicator => default_page_indicator(),
    }
}

fn default_page_indicator() -> ControlConfig {
    ControlConfig {
        enabled: Some(true),
        text: None,
        text_style: Some(TextStyle {
            size: DEFAULT_PAGE_TEXT_SIZE,
            color: DEFAULT_PAGE_TEXT_COLOR.to_string(),
            bold: false,
        }),
        size: None,
        icon: None,
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Returns the default config file path, if a config directory is known.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (HeaderConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (HeaderConfig, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), err);
                    return (
                        HeaderConfig::default(),
                        Some(format!("{} is invalid, using defaults: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (HeaderConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<HeaderConfig> {
    let content = fs::read_to_string(path)?;
    let config: HeaderConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &HeaderConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &HeaderConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &HeaderConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
