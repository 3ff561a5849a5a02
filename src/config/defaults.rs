// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all header configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Band height, notch threshold and side paddings
//! - **Controls**: Labels, text sizes and colors of the four controls
//! - **Appearance**: Header background

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of the content band hosting the controls (banded layout).
pub const DEFAULT_BAND_HEIGHT: f32 = 60.0;

/// Safe-area top insets at or below this value are treated as no notch.
pub const DEFAULT_NOTCH_THRESHOLD: f32 = 20.0;

/// Side padding of the banded layout in portrait orientation.
pub const DEFAULT_PORTRAIT_PADDING: f32 = 17.0;

/// Side padding of the banded layout in landscape orientation.
pub const DEFAULT_LANDSCAPE_PADDING: f32 = 32.0;

/// Fixed side padding of the legacy top-aligned layout.
pub const DEFAULT_LEGACY_SIDE_PADDING: f32 = 16.0;

// ==========================================================================
// Control Defaults
// ==========================================================================

pub const DEFAULT_CLOSE_TEXT: &str = "Close";
pub const DEFAULT_DELETE_TEXT: &str = "Delete";
pub const DEFAULT_SHARE_TEXT: &str = "Share";

/// Text size of the close, delete and share buttons.
pub const DEFAULT_BUTTON_TEXT_SIZE: f32 = 16.0;

/// Text size of the page indicator.
pub const DEFAULT_PAGE_TEXT_SIZE: f32 = 12.0;

pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_DELETE_TEXT_COLOR: &str = "#fa2f5b";
pub const DEFAULT_PAGE_TEXT_COLOR: &str = "#899ab8";

/// Icon edge length used when an icon declares no size of its own.
pub const DEFAULT_ICON_SIZE: f32 = 24.0;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Opacity of the black header background (0.0 to 1.0).
pub const DEFAULT_BACKGROUND_ALPHA: f32 = 0.5;
