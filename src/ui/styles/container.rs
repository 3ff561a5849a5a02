// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Translucent black bar behind the header controls.
pub fn header_background(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Flat viewer surface used by the demo application.
pub fn viewer_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::VIEWER_SURFACE)),
        ..Default::default()
    }
}
