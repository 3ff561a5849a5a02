// SPDX-License-Identifier: MPL-2.0
//! Host environment seen by the layout engine.

use super::geometry::Insets;
use super::layout::HeaderState;
use iced::Size;

/// Supplies the container size, safe-area insets and orientation.
///
/// Hosts implement this over their window or surface; tests use
/// [`StaticEnvironment`].
pub trait EnvironmentProvider {
    fn container_size(&self) -> Size;

    fn safe_area_insets(&self) -> Insets;

    /// Defaults to comparing the container's sides.
    fn is_landscape(&self) -> bool {
        let size = self.container_size();
        size.width > size.height
    }

    /// Snapshots the environment into the inputs of one layout pass.
    fn header_state(&self) -> HeaderState {
        HeaderState::new(
            self.container_size(),
            self.safe_area_insets().top,
            self.is_landscape(),
        )
    }
}

/// Fixed environment values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticEnvironment {
    pub size: Size,
    pub insets: Insets,
    /// Explicit orientation; derived from `size` when `None`.
    pub landscape: Option<bool>,
}

impl StaticEnvironment {
    #[must_use]
    pub fn new(size: Size, insets: Insets) -> Self {
        Self {
            size,
            insets,
            landscape: None,
        }
    }

    #[must_use]
    pub fn landscape(mut self, landscape: bool) -> Self {
        self.landscape = Some(landscape);
        self
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn container_size(&self) -> Size {
        self.size
    }

    fn safe_area_insets(&self) -> Insets {
        self.insets
    }

    fn is_landscape(&self) -> bool {
        self.landscape
            .unwrap_or(self.size.width > self.size.height)
    }
}
