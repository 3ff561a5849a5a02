// SPDX-License-Identifier: MPL-2.0
//! Layout engine.
//!
//! A layout pass is a pure function of a [`HeaderState`] and the control
//! sizes: it never reads previous frames, so running it twice with the same
//! input yields the same frames.
//!
//! Two modes are supported:
//!
//! - **Banded**: controls are vertically centered in a band of fixed height
//!   placed below the top safe-area inset. Insets at or below the notch
//!   threshold are ignored. Side padding grows in landscape.
//! - **Legacy**: controls are top-aligned at the raw inset with a fixed
//!   side padding and no band.
//!
//! All frames are in header coordinates: `(0, 0)` is the header's top-left
//! corner, which coincides with the top of the container.

use super::geometry::{centered, PerRole};
use crate::config::{CenterConflict, LayoutConfig};
use iced::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};

/// Inputs of one layout pass. Replaced as a whole on every pass.
///
/// The header never persists it; it is serializable only so it can travel
/// inside a [`HeaderSnapshot`](super::HeaderSnapshot).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderState {
    pub container_width: f32,
    pub container_height: f32,
    pub top_safe_area_inset: f32,
    pub is_landscape: bool,
}

impl HeaderState {
    #[must_use]
    pub fn new(container: Size, top_safe_area_inset: f32, is_landscape: bool) -> Self {
        Self {
            container_width: container.width,
            container_height: container.height,
            top_safe_area_inset,
            is_landscape,
        }
    }

    #[must_use]
    pub fn container(&self) -> Size {
        Size::new(self.container_width, self.container_height)
    }
}

/// Layout strategy, chosen once from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutMode {
    Banded {
        band_height: f32,
        notch_threshold: f32,
        portrait_padding: f32,
        landscape_padding: f32,
    },
    Legacy {
        side_padding: f32,
    },
}

impl LayoutMode {
    #[must_use]
    pub fn from_config(config: &LayoutConfig) -> Self {
        if config.legacy_layout {
            LayoutMode::Legacy {
                side_padding: config.legacy_side_padding,
            }
        } else {
            LayoutMode::Banded {
                band_height: config.band_height,
                notch_threshold: config.notch_threshold,
                portrait_padding: config.portrait_padding,
                landscape_padding: config.landscape_padding,
            }
        }
    }

    #[must_use]
    pub fn is_legacy(&self) -> bool {
        matches!(self, LayoutMode::Legacy { .. })
    }

    /// Top inset the layout actually honors for a reported safe-area inset.
    #[must_use]
    pub fn effective_top_inset(&self, reported: f32) -> f32 {
        let reported = reported.max(0.0);
        match *self {
            LayoutMode::Banded {
                notch_threshold, ..
            } => {
                if reported > notch_threshold {
                    reported
                } else {
                    0.0
                }
            }
            LayoutMode::Legacy { .. } => reported,
        }
    }

    /// Horizontal gap between the container edges and the side controls.
    #[must_use]
    pub fn side_padding(&self, is_landscape: bool) -> f32 {
        match *self {
            LayoutMode::Banded {
                portrait_padding,
                landscape_padding,
                ..
            } => {
                if is_landscape {
                    landscape_padding
                } else {
                    portrait_padding
                }
            }
            LayoutMode::Legacy { side_padding } => side_padding,
        }
    }
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOutcome {
    /// Top inset honored by the pass.
    pub top_inset: f32,
    /// Total header height, inset included.
    pub height: f32,
    /// Strip below the inset that hosts the controls.
    pub band: Rectangle,
    /// Frame of every control, visible or not.
    pub frames: PerRole<Rectangle>,
}

/// Decides which enabled controls are shown.
///
/// The delete control and the page indicator share the same center point;
/// when both are enabled, `conflict` picks the one that stays visible.
#[must_use]
pub fn resolve_visibility(enabled: &PerRole<bool>, conflict: CenterConflict) -> PerRole<bool> {
    let mut visible = *enabled;
    if enabled.delete && enabled.page_indicator {
        match conflict {
            CenterConflict::PreferPageIndicator => visible.delete = false,
            CenterConflict::PreferDelete => visible.page_indicator = false,
        }
    }
    visible
}

/// Computes every control frame for `state`.
///
/// `visible` only affects the legacy header height; frames of hidden
/// controls are still computed.
#[must_use]
pub fn compute_layout(
    mode: &LayoutMode,
    state: &HeaderState,
    sizes: &PerRole<Size>,
    visible: &PerRole<bool>,
) -> LayoutOutcome {
    let width = state.container_width.max(0.0);
    let top_inset = mode.effective_top_inset(state.top_safe_area_inset);
    let padding = mode.side_padding(state.is_landscape);

    match *mode {
        LayoutMode::Banded { band_height, .. } => {
            let band = Rectangle {
                x: 0.0,
                y: top_inset,
                width,
                height: band_height,
            };
            let center_y = band.center_y();
            let center_x = band.center_x();

            let frames = PerRole {
                close: centered(
                    Point::new(padding + sizes.close.width / 2.0, center_y),
                    sizes.close,
                ),
                share: centered(
                    Point::new(width - padding - sizes.share.width / 2.0, center_y),
                    sizes.share,
                ),
                delete: centered(Point::new(center_x, center_y), sizes.delete),
                page_indicator: centered(Point::new(center_x, center_y), sizes.page_indicator),
            };

            LayoutOutcome {
                top_inset,
                height: top_inset + band_height,
                band,
                frames,
            }
        }
        LayoutMode::Legacy { .. } => {
            let frames = PerRole {
                close: Rectangle::new(Point::new(padding, top_inset), sizes.close),
                share: Rectangle::new(
                    Point::new(width - sizes.share.width - padding, top_inset),
                    sizes.share,
                ),
                delete: Rectangle::new(
                    Point::new((width - sizes.delete.width) / 2.0, top_inset),
                    sizes.delete,
                ),
                page_indicator: Rectangle::new(
                    Point::new((width - sizes.page_indicator.width) / 2.0, top_inset),
                    sizes.page_indicator,
                ),
            };

            let bar_height = sizes
                .iter()
                .filter(|(role, _)| *visible.get(*role))
                .map(|(_, size)| size.height)
                .fold(0.0_f32, f32::max);

            LayoutOutcome {
                top_inset,
                height: top_inset + bar_height,
                band: Rectangle {
                    x: 0.0,
                    y: top_inset,
                    width,
                    height: bar_height,
                },
                frames,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::geometry::encloses;

    fn sizes() -> PerRole<Size> {
        PerRole {
            close: Size::new(44.0, 20.0),
            delete: Size::new(54.0, 20.0),
            share: Size::new(40.0, 30.0),
            page_indicator: Size::new(24.0, 15.0),
        }
    }

    fn all_visible() -> PerRole<bool> {
        PerRole::from_fn(|_| true)
    }

    fn portrait(inset: f32) -> HeaderState {
        HeaderState::new(Size::new(375.0, 812.0), inset, false)
    }

    fn banded(state: &HeaderState) -> LayoutOutcome {
        compute_layout(&LayoutMode::default(), state, &sizes(), &all_visible())
    }

    #[test]
    fn notch_threshold_ignores_small_insets() {
        let mode = LayoutMode::default();
        assert_eq!(mode.effective_top_inset(0.0), 0.0);
        assert_eq!(mode.effective_top_inset(20.0), 0.0);
        assert_eq!(mode.effective_top_inset(20.5), 20.5);
        assert_eq!(mode.effective_top_inset(47.0), 47.0);
    }

    #[test]
    fn legacy_mode_uses_raw_inset() {
        let mode = LayoutMode::Legacy { side_padding: 16.0 };
        assert_eq!(mode.effective_top_inset(20.0), 20.0);
        assert_eq!(mode.effective_top_inset(-3.0), 0.0);
    }

    #[test]
    fn banded_height_adds_band_to_inset() {
        let outcome = banded(&portrait(47.0));
        assert_eq!(outcome.height, 107.0);
        assert_eq!(
            outcome.band,
            Rectangle::new(Point::new(0.0, 47.0), Size::new(375.0, 60.0))
        );
    }

    #[test]
    fn banded_controls_center_on_band_midline() {
        let outcome = banded(&portrait(47.0));
        for (_, frame) in outcome.frames.iter() {
            assert_eq!(frame.center_y(), 77.0);
            assert!(encloses(outcome.band, *frame));
        }
        assert_eq!(outcome.frames.delete.center_x(), 187.5);
        assert_eq!(outcome.frames.page_indicator.center_x(), 187.5);
    }

    #[test]
    fn banded_side_controls_mirror_each_other() {
        let outcome = banded(&portrait(0.0));
        assert_eq!(outcome.frames.close.x, 17.0);
        let share = outcome.frames.share;
        assert_eq!(375.0 - (share.x + share.width), 17.0);
    }

    #[test]
    fn landscape_widens_side_padding() {
        let mode = LayoutMode::default();
        let mut state = portrait(0.0);
        let portrait_close = compute_layout(&mode, &state, &sizes(), &all_visible()).frames.close;
        state.is_landscape = true;
        let landscape_close = compute_layout(&mode, &state, &sizes(), &all_visible()).frames.close;

        assert_eq!(portrait_close.x, 17.0);
        assert_eq!(landscape_close.x, 32.0);
    }

    #[test]
    fn legacy_controls_share_top_edge() {
        let mode = LayoutMode::Legacy { side_padding: 16.0 };
        let outcome = compute_layout(&mode, &portrait(44.0), &sizes(), &all_visible());

        assert_eq!(outcome.frames.close.position(), Point::new(16.0, 44.0));
        assert_eq!(outcome.frames.share.position(), Point::new(319.0, 44.0));
        assert_eq!(outcome.frames.delete.position(), Point::new(160.5, 44.0));
        assert_eq!(
            outcome.frames.page_indicator.position(),
            Point::new(175.5, 44.0)
        );
        assert_eq!(outcome.height, 44.0 + 30.0);
        assert_eq!(
            outcome.band,
            Rectangle::new(Point::new(0.0, 44.0), Size::new(375.0, 30.0))
        );
    }

    #[test]
    fn legacy_height_ignores_hidden_controls() {
        let mode = LayoutMode::Legacy { side_padding: 16.0 };
        let mut visible = all_visible();
        visible.share = false;
        let outcome = compute_layout(&mode, &portrait(0.0), &sizes(), &visible);
        assert_eq!(outcome.height, 20.0);

        let none = PerRole::from_fn(|_| false);
        assert_eq!(compute_layout(&mode, &portrait(10.0), &sizes(), &none).height, 10.0);
    }

    #[test]
    fn layout_is_idempotent() {
        for mode in [LayoutMode::default(), LayoutMode::Legacy { side_padding: 16.0 }] {
            let state = HeaderState::new(Size::new(812.0, 375.0), 0.0, true);
            let first = compute_layout(&mode, &state, &sizes(), &all_visible());
            let second = compute_layout(&mode, &state, &sizes(), &all_visible());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn page_indicator_wins_center_by_default() {
        let visible = resolve_visibility(&all_visible(), CenterConflict::PreferPageIndicator);
        assert!(!visible.delete);
        assert!(visible.page_indicator);

        let visible = resolve_visibility(&all_visible(), CenterConflict::PreferDelete);
        assert!(visible.delete);
        assert!(!visible.page_indicator);
    }

    #[test]
    fn no_conflict_when_one_center_control_is_disabled() {
        let mut enabled = all_visible();
        enabled.page_indicator = false;
        let visible = resolve_visibility(&enabled, CenterConflict::PreferPageIndicator);
        assert!(visible.delete);
    }

    #[test]
    fn mode_follows_legacy_flag() {
        let mut config = LayoutConfig::default();
        assert!(!LayoutMode::from_config(&config).is_legacy());
        config.legacy_layout = true;
        assert_eq!(
            LayoutMode::from_config(&config),
            LayoutMode::Legacy { side_padding: 16.0 }
        );
    }
}
