// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Routes window resizes and paging keys.
///
/// Keyboard events already captured by a widget are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if matches!(status, event::Status::Ignored) =>
        {
            match key {
                Key::Named(Named::ArrowRight) => Some(Message::NextPage),
                Key::Named(Named::ArrowLeft) => Some(Message::PreviousPage),
                Key::Named(Named::Escape) => Some(Message::Exit),
                _ => None,
            }
        }
        _ => None,
    })
}
