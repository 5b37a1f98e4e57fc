// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Color, Theme};

/// Full-surface dim layer behind a presented alert.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Label area inside the card: text color only, no background.
pub fn label(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(color),
        ..Default::default()
    }
}

/// Window background of the demo, derived from the active theme.
pub fn page(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        ..Default::default()
    }
}
