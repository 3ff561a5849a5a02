// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the header, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`header_view`] - Header view, messages and update
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, opacity, spacing)

pub mod design_tokens;
pub mod header_view;
pub mod styles;
