// SPDX-License-Identifier: MPL-2.0
//! Activation forwarding.

use super::control::{Control, ControlRole};
use super::Header;

/// Observer notified when an interactive control is activated.
///
/// The header keeps only a weak reference; implementations that need to
/// mutate state use interior mutability.
pub trait HeaderDelegate {
    fn on_close_pressed(&self, header: &Header, control: &Control);

    fn on_delete_pressed(&self, header: &Header, control: &Control);

    fn on_share_pressed(&self, header: &Header, control: &Control);
}

/// Events propagated to the host after an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ClosePressed,
    DeletePressed,
    SharePressed,
}

impl Event {
    /// Event raised by activating `role`.
    #[must_use]
    pub fn for_role(role: ControlRole) -> Self {
        match role {
            ControlRole::Close => Event::ClosePressed,
            ControlRole::Delete => Event::DeletePressed,
            ControlRole::Share => Event::SharePressed,
            ControlRole::PageIndicator => Event::None,
        }
    }
}
