// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::config::MAX_ACTIONS;
use crate::ui::alert::{self, AlertCategory};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the alert host.
    Alert(alert::Message),
    /// Present a fresh alert built from the flags.
    ShowAlert,
}

/// Runtime flags passed in from the CLI to describe the demo alert.
#[derive(Debug, Clone)]
pub struct Flags {
    pub category: AlertCategory,
    /// Number of action buttons, at most three.
    pub actions: usize,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ALERT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

impl Flags {
    /// Clamps the action count to what an alert can hold.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.actions > MAX_ACTIONS {
            log::warn!(
                "Requested {} actions, an alert holds at most {MAX_ACTIONS}",
                self.actions
            );
            self.actions = MAX_ACTIONS;
        }
        self
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            category: AlertCategory::Notification,
            actions: 2,
            title: Some("Heads up".to_owned()),
            message: Some(
                "This alert grows with its message and dismisses itself when a button is tapped."
                    .to_owned(),
            ),
            config_dir: None,
        }
    }
}
