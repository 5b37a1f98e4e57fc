// SPDX-License-Identifier: MPL-2.0
//! Modal alert popup.
//!
//! An [`Alert`] is a card with a category-colored header, a title, a message
//! and up to three [`Action`] buttons, shown over a dimmed backdrop. It plays
//! a shrink-and-fade transition when dismissed and then runs its completion.
//!
//! # Components
//!
//! - [`modal`] - `Alert` and its presentation lifecycle
//! - [`action`] - `Action` buttons and their tap handlers
//! - [`layout`] - Card geometry for a given title, message and action count
//! - [`host`] - `Host` owning presented alerts and routing their messages
//! - [`view`] / [`chrome`] - Widgets and canvas drawing
//!
//! # Usage
//!
//! ```ignore
//! use iced_alert::ui::alert::{Action, Alert, AlertCategory, Host};
//!
//! let mut host = Host::new();
//!
//! let alert = Alert::new(AlertCategory::Warning)
//!     .with_title("Unsaved changes")
//!     .with_message("Close the document anyway?")
//!     .with_action(Action::new("Cancel"))
//!     .with_action(Action::new("Close").on_tap(|_| log::info!("closing")));
//!
//! host.present(alert, None);
//!
//! // In update: host.handle_message(&message, Instant::now());
//! // In view: host.view(base, Message::Alert)
//! // In subscription: host.subscription().map(Message::Alert)
//! ```

pub mod action;
pub mod category;
pub mod chrome;
pub mod geometry;
pub mod header;
pub mod host;
pub mod layout;
pub mod lifecycle;
pub mod metrics;
pub mod modal;
pub mod surface;
pub mod view;

pub use action::Action;
pub use category::AlertCategory;
pub use header::{BadgeHeader, HeaderRenderer};
pub use host::{Host, Message};
pub use layout::Layout;
pub use lifecycle::{Appearance, DismissAnimation, Presentation};
pub use metrics::{AverageAdvance, TextMetrics, Typeface};
pub use modal::{Alert, Completion};
pub use surface::{AlertId, Layer, Surface};
