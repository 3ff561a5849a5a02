// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the header widgets.

pub mod button;
pub mod container;
