// SPDX-License-Identifier: MPL-2.0
//! Header button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Transparent button drawn over the header background.
///
/// Hover adds a subtle white wash; pressed dims the label so the tap is
/// visible without any chrome.
pub fn header_control(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered => (
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                })),
                text_color,
            ),
            button::Status::Pressed => (
                None,
                Color {
                    a: text_color.a * opacity::OVERLAY_PRESSED,
                    ..text_color
                },
            ),
            _ => (None, text_color),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn active_button_is_transparent() {
        let style = header_control(palette::WHITE)(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn pressed_button_dims_label() {
        let style = header_control(palette::WHITE)(&Theme::Dark, button::Status::Pressed);
        assert!(style.text_color.a < 1.0);
    }

    #[test]
    fn hovered_button_gets_wash() {
        let style = header_control(palette::WHITE)(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_some());
    }
}
