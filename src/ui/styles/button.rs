// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Style for the primary button of the demo window.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 1.0 - opacity::PRESSED,
            ..palette::ACCENT_BLUE
        },
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::ACCENT_BLUE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::CARD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Style for an action cell.
///
/// The cell face itself is painted by the chrome canvas underneath, so the
/// button only adds a faint tint while hovered or pressed. Every alpha is
/// multiplied by `fade` while the alert is dismissing.
pub fn action_cell(
    text_color: Color,
    fade: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let tint = match status {
            button::Status::Hovered => opacity::HOVER,
            button::Status::Pressed => opacity::PRESSED,
            button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
        };

        button::Style {
            background: (tint > 0.0).then_some(Background::Color(Color {
                a: tint * fade,
                ..BLACK
            })),
            text_color: Color {
                a: text_color.a * fade,
                ..text_color
            },
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_cell_is_transparent_at_rest() {
        let style = action_cell(palette::ACCENT_BLUE, 1.0)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette::ACCENT_BLUE);
    }

    #[test]
    fn action_cell_tints_when_pressed() {
        let style = action_cell(palette::ACCENT_BLUE, 1.0)(&Theme::Light, button::Status::Pressed);
        assert_eq!(
            style.background,
            Some(Background::Color(Color {
                a: opacity::PRESSED,
                ..BLACK
            }))
        );
    }

    #[test]
    fn action_cell_fades_text() {
        let style = action_cell(palette::ACCENT_BLUE, 0.5)(&Theme::Light, button::Status::Active);
        assert!((style.text_color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn primary_uses_accent() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ACCENT_BLUE))
        );
    }
}
