// SPDX-License-Identifier: MPL-2.0
//! `lens_header` is the overlay header of a full-screen media viewer built
//! with the Iced GUI framework.
//!
//! It hosts a close button, a delete button, a share button and a page
//! indicator, computes their frames from the container size, the top
//! safe-area inset and the orientation, and forwards taps to a delegate.

pub mod app;
pub mod config;
pub mod error;
pub mod header;
pub mod ui;
