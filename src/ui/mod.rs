// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows the Elm-style "state down, messages up" pattern used
//! throughout iced.
//!
//! - [`alert`] - The modal alert popup and the host that presents it
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)

pub mod alert;
pub mod design_tokens;
pub mod styles;
