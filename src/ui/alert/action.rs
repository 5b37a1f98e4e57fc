// SPDX-License-Identifier: MPL-2.0
//! One button in an alert's button row.

use super::metrics::Typeface;
use super::surface::AlertId;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Callback run when an action is tapped.
pub type Handler = Box<dyn FnMut(&Action)>;

/// Description of an alert button plus the code it runs.
///
/// Appearance is fixed once the action is added to an alert. The alert reads
/// it when it builds its visual tree.
pub struct Action {
    label: Option<String>,
    typeface: Typeface,
    text_color: Color,
    background_color: Color,
    handler: Option<Handler>,
    owner: Option<AlertId>,
}

impl Action {
    /// Creates an action with the given label and default styling.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn font(mut self, typeface: Typeface) -> Self {
        self.typeface = typeface;
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the callback run on tap, before the owning alert is notified.
    #[must_use]
    pub fn on_tap(mut self, handler: impl FnMut(&Action) + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn typeface(&self) -> Typeface {
        self.typeface
    }

    #[must_use]
    pub fn text_color_value(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn background_color_value(&self) -> Color {
        self.background_color
    }

    /// The alert this action was added to.
    #[must_use]
    pub fn owner(&self) -> Option<AlertId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: AlertId) {
        self.owner = Some(owner);
    }

    /// Runs the handler, then returns the alert to notify.
    pub fn tap(&mut self) -> Option<AlertId> {
        if let Some(mut handler) = self.handler.take() {
            handler(self);
            self.handler = Some(handler);
        }
        self.owner
    }
}

impl Default for Action {
    fn default() -> Self {
        Self {
            label: None,
            typeface: Typeface::default(),
            text_color: palette::ACCENT_BLUE,
            background_color: palette::SURFACE,
            handler: None,
            owner: None,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("typeface", &self.typeface)
            .field("text_color", &self.text_color)
            .field("background_color", &self.background_color)
            .field("has_handler", &self.handler.is_some())
            .field("owner", &self.owner)
            .finish()
    }
}
