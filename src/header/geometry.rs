// SPDX-License-Identifier: MPL-2.0
//! Geometry helpers shared by the layout engine and its hosts.

use super::control::ControlRole;
use iced::{Point, Rectangle, Size};

/// Safe-area insets reported by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// Insets with only a top margin, the common case for a status bar or notch.
    #[must_use]
    pub fn top(top: f32) -> Self {
        Self {
            top,
            ..Self::default()
        }
    }
}

/// One value per control role.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerRole<T> {
    pub close: T,
    pub delete: T,
    pub share: T,
    pub page_indicator: T,
}

impl<T> PerRole<T> {
    /// Builds a map by evaluating `f` for every role.
    pub fn from_fn(mut f: impl FnMut(ControlRole) -> T) -> Self {
        Self {
            close: f(ControlRole::Close),
            delete: f(ControlRole::Delete),
            share: f(ControlRole::Share),
            page_indicator: f(ControlRole::PageIndicator),
        }
    }

    #[must_use]
    pub fn get(&self, role: ControlRole) -> &T {
        match role {
            ControlRole::Close => &self.close,
            ControlRole::Delete => &self.delete,
            ControlRole::Share => &self.share,
            ControlRole::PageIndicator => &self.page_indicator,
        }
    }

    pub fn get_mut(&mut self, role: ControlRole) -> &mut T {
        match role {
            ControlRole::Close => &mut self.close,
            ControlRole::Delete => &mut self.delete,
            ControlRole::Share => &mut self.share,
            ControlRole::PageIndicator => &mut self.page_indicator,
        }
    }

    /// Iterates over `(role, value)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (ControlRole, &T)> {
        ControlRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(ControlRole, &T) -> U) -> PerRole<U> {
        PerRole::from_fn(|role| f(role, self.get(role)))
    }
}

/// Rectangle of `size` whose center is `center`.
#[must_use]
pub fn centered(center: Point, size: Size) -> Rectangle {
    Rectangle {
        x: center.x - size.width / 2.0,
        y: center.y - size.height / 2.0,
        width: size.width,
        height: size.height,
    }
}

/// Whether `inner` lies entirely within `outer`, edges included.
#[must_use]
pub fn encloses(outer: Rectangle, inner: Rectangle) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.x + inner.width <= outer.x + outer.width
        && inner.y + inner.height <= outer.y + outer.height
}
