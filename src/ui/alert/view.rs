// SPDX-License-Identifier: MPL-2.0
//! Widget tree of a presented alert.
//!
//! The card is a stack of two layers with the same geometry: the chrome
//! canvas underneath, and a column of labels and buttons on top. A dim
//! backdrop covers the rest of the surface and swallows clicks.

use super::chrome::Chrome;
use super::header::HeaderRenderer;
use super::host::Message;
use super::layout::Layout;
use super::metrics::Typeface;
use super::modal::Alert;
use crate::ui::design_tokens::{palette, shadow, typography};
use crate::ui::styles;
use iced::widget::text::LineHeight;
use iced::widget::{button, center, column, container, opaque, text, Canvas, Row, Stack};
use iced::{Color, Element, Length, Padding, Rectangle};

/// Renders `alert` over a full-surface backdrop.
///
/// Returns `None` until the alert has been shown, since there is no tree to
/// draw before that.
pub fn overlay<'a>(
    alert: &'a Alert,
    header: &'a dyn HeaderRenderer,
) -> Option<Element<'a, Message>> {
    let fade = alert.appearance().opacity;
    let card = card(alert, header)?;

    let backdrop_color = alert.backdrop_color();
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(Color {
            a: backdrop_color.a * fade,
            ..backdrop_color
        }));

    Some(Stack::new().push(opaque(backdrop)).push(center(card)).into())
}

/// The popup card alone, at the alert's current scale and opacity.
pub fn card<'a>(
    alert: &'a Alert,
    header: &'a dyn HeaderRenderer,
) -> Option<Element<'a, Message>> {
    let appearance = alert.appearance();
    let scale = appearance.scale;
    let fade = appearance.opacity;
    let layout = alert.layout()?.scaled(scale);
    let margin = shadow::RADIUS * scale;
    let displayed = &alert.actions()[..layout.action_count()];

    let chrome = Canvas::new(Chrome::new(
        layout.clone(),
        alert.category(),
        header,
        alert.separator_color(),
        displayed.iter().map(|a| a.background_color_value()).collect(),
        fade,
        margin,
    ))
    .width(Length::Fixed(layout.card.width + 2.0 * margin))
    .height(Length::Fixed(layout.card.height + 2.0 * margin));

    let header_spacer = container(column![])
        .width(Length::Fixed(layout.header.width))
        .height(Length::Fixed(layout.header.height));

    let content = column![
        label(alert.title(), Typeface::title().scaled(scale), layout.title, fade),
        label(alert.message(), Typeface::message().scaled(scale), layout.message, fade),
    ]
    .spacing(layout.content_gap)
    .padding(Padding {
        top: 0.0,
        right: layout.content_inset,
        bottom: layout.content_inset,
        left: layout.content_inset,
    })
    .width(Length::Fixed(layout.content.width))
    .height(Length::Fixed(layout.content.height));

    let mut body = column![header_spacer, content];
    if !displayed.is_empty() {
        body = body.push(button_row(alert, &layout, scale, fade));
    }

    Some(
        Stack::new()
            .push(chrome)
            .push(container(body).padding(margin))
            .into(),
    )
}

fn label<'a>(
    content: Option<&'a str>,
    typeface: Typeface,
    bounds: Rectangle,
    fade: f32,
) -> Element<'a, Message> {
    container(
        text(content.unwrap_or_default())
            .font(typeface.font)
            .size(typeface.size)
            .line_height(LineHeight::Relative(typography::LINE_HEIGHT))
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(bounds.width))
    .height(Length::Fixed(bounds.height))
    .clip(true)
    .style(styles::container::label(Color {
        a: fade,
        ..palette::GRAY_900
    }))
    .into()
}

/// Message sent by the button drawn for the action at `index`.
///
/// Buttons are inert unless the alert is presented and the action is one of
/// the displayed cells.
fn cell_message(alert: &Alert, index: usize) -> Option<Message> {
    let displayed = alert.displayed_action_count();
    (alert.is_presented() && index < displayed).then(|| Message::ActionTapped {
        alert: alert.id(),
        index,
    })
}

fn button_row<'a>(
    alert: &'a Alert,
    layout: &Layout,
    scale: f32,
    fade: f32,
) -> Element<'a, Message> {
    let faces = layout.cell_faces();

    let cells = alert
        .actions()
        .iter()
        .zip(faces)
        .enumerate()
        .map(|(index, (action, (face, _)))| {
            let typeface = action.typeface().scaled(scale);
            let cell = button(
                text(action.label().unwrap_or_default())
                    .font(typeface.font)
                    .size(typeface.size)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center(),
            )
            .padding(0)
            .width(Length::Fixed(face.width))
            .height(Length::Fixed(face.height))
            .style(styles::button::action_cell(action.text_color_value(), fade))
            .on_press_maybe(cell_message(alert, index));

            Element::from(cell)
        });

    Row::with_children(cells)
        .spacing(layout.action_gap)
        .padding(Padding {
            top: layout.action_gap,
            ..Padding::ZERO
        })
        .width(Length::Fixed(layout.button_row.width))
        .height(Length::Fixed(layout.button_row.height))
        .into()
}
