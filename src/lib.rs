// SPDX-License-Identifier: MPL-2.0
//! `iced_alert` is a modal alert popup built with the Iced GUI framework.
//!
//! An alert shows a category-colored header, a title, a message and up to
//! three action buttons over a dimmed backdrop, then shrinks and fades out
//! when dismissed. The card's layout, path geometry and lifecycle are plain
//! Rust types that can be tested without a window.

#![doc(html_root_url = "https://docs.rs/iced_alert/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
