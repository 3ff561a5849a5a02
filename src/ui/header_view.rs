// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the header.
//!
//! The view draws a translucent bar as tall as the header and places every
//! visible control at the frame computed by the last layout pass. Hidden
//! controls are not drawn at all.

use crate::header::{Control, ControlContent, ControlRole, Event, Header, ResolvedTextStyle};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, svg, Container, Space, Stack, Text};
use iced::{Element, Font, Length, Padding, Rectangle};

/// Messages emitted by the header view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed(ControlRole),
}

/// Process a header message and return the corresponding event.
pub fn update(header: &Header, message: Message) -> Event {
    match message {
        Message::Pressed(role) => header.activate(role),
    }
}

/// Render the header at its current height.
pub fn view(header: &Header) -> Element<'_, Message> {
    let background = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::header_background(
            header.background_alpha(),
        ));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(header.height()))
        .push(background);

    for element in placed_controls(header) {
        stack = stack.push(element);
    }

    stack.into()
}

/// One positioned element per visible control, in role order.
fn placed_controls(header: &Header) -> Vec<Element<'_, Message>> {
    header
        .visible_controls()
        .map(|control| place(control_element(control), control.frame()))
        .collect()
}

/// Offsets `element` so its top-left corner lands on `frame`.
fn place(element: Element<'_, Message>, frame: Rectangle) -> Element<'_, Message> {
    Container::new(element)
        .padding(Padding {
            top: frame.y.max(spacing::NONE),
            right: spacing::NONE,
            bottom: spacing::NONE,
            left: frame.x.max(spacing::NONE),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn font_for(style: &ResolvedTextStyle) -> Font {
    if style.bold {
        Font {
            weight: Weight::Bold,
            ..Font::default()
        }
    } else {
        Font::default()
    }
}

fn control_element(control: &Control) -> Element<'_, Message> {
    let size = control.size();
    let style = control.content().style();

    let label: Element<'_, Message> = match control.content() {
        ControlContent::Icon { icon, .. } => svg::Svg::new(svg::Handle::from_path(icon.path.clone()))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ControlContent::Text { text, .. } if control.role().is_interactive() => {
            // Buttons take the label color from their style so pressing can dim it
            Text::new(text.as_str())
                .size(style.size)
                .font(font_for(style))
                .into()
        }
        ControlContent::Text { text, .. } => Text::new(text.as_str())
            .size(style.size)
            .font(font_for(style))
            .color(style.color)
            .into(),
    };

    if control.role().is_interactive() {
        button(label)
            .padding(0)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .style(styles::button::header_control(style.color))
            .on_press(Message::Pressed(control.role()))
            .into()
    } else {
        Container::new(label)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderConfig;
    use crate::header::{Insets, StaticEnvironment};
    use iced::Size;

    #[test]
    fn pressed_message_activates_control() {
        let header = Header::new(&HeaderConfig::default());
        assert_eq!(
            update(&header, Message::Pressed(ControlRole::Close)),
            Event::ClosePressed
        );
    }

    #[test]
    fn pressed_message_for_hidden_control_is_ignored() {
        let header = Header::new(&HeaderConfig::default());
        assert_eq!(
            update(&header, Message::Pressed(ControlRole::Share)),
            Event::None
        );
    }

    #[test]
    fn only_visible_controls_are_placed() {
        let mut header = Header::new(&HeaderConfig::default());
        header.on_bounds_changed(&StaticEnvironment::new(
            Size::new(375.0, 812.0),
            Insets::top(47.0),
        ));
        header.update_page(2, 5);

        // close and page indicator
        assert_eq!(placed_controls(&header).len(), 2);
        assert_eq!(
            placed_controls(&header).len(),
            header.visible_controls().count()
        );

        header.set_enabled(ControlRole::Close, false);
        assert_eq!(placed_controls(&header).len(), 1);
    }

    #[test]
    fn bold_style_selects_bold_font() {
        let style = ResolvedTextStyle {
            bold: true,
            ..ResolvedTextStyle::default()
        };
        assert_eq!(font_for(&style).weight, Weight::Bold);
        assert_eq!(font_for(&ResolvedTextStyle::default()), Font::default());
    }
}
