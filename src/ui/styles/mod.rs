// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the alert widgets and the demo window.

pub mod button;
pub mod container;

pub use button::primary as button_primary;
