// SPDX-License-Identifier: MPL-2.0
//! Canvas program painting the card's non-text parts.
//!
//! Shadow, header band, content background, separator and cell faces are all
//! filled paths. Text and buttons are regular widgets stacked on top.

use super::category::AlertCategory;
use super::geometry::{self, PathCommand};
use super::header::HeaderRenderer;
use super::layout::Layout;
use crate::config::CORNER_RADIUS;
use crate::ui::design_tokens::{opacity, palette, shadow};
use iced::widget::canvas::{self, Frame, Geometry, Stroke};
use iced::{mouse, Color, Rectangle, Renderer, Theme, Vector};

/// One filled shape of the chrome, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub path: Vec<PathCommand>,
    pub color: Color,
}

/// Everything the chrome canvas paints for one frame.
#[derive(Debug)]
pub struct Chrome<'a> {
    layout: Layout,
    category: AlertCategory,
    header: &'a dyn HeaderRenderer,
    separator_color: Color,
    cell_colors: Vec<Color>,
    opacity: f32,
    margin: f32,
}

impl<'a> Chrome<'a> {
    /// `layout` is expected to be already scaled to the current appearance.
    #[must_use]
    pub fn new(
        layout: Layout,
        category: AlertCategory,
        header: &'a dyn HeaderRenderer,
        separator_color: Color,
        cell_colors: Vec<Color>,
        opacity: f32,
        margin: f32,
    ) -> Self {
        Self {
            layout,
            category,
            header,
            separator_color,
            cell_colors,
            opacity,
            margin,
        }
    }

    fn faded(&self, color: Color) -> Color {
        Color {
            a: color.a * self.opacity,
            ..color
        }
    }

    /// Stroke widths and colors approximating the blurred drop shadow.
    #[must_use]
    pub fn shadow_strokes(&self) -> Vec<(f32, Color)> {
        let steps = f32::from(shadow::STEPS);
        let color = self.faded(Color {
            a: opacity::SHADOW / steps,
            ..palette::BLACK
        });
        let scale = self.layout.corner_radius / CORNER_RADIUS;
        (1..=shadow::STEPS)
            .map(|step| {
                let reach = shadow::RADIUS * scale * f32::from(step) / steps;
                (2.0 * reach, color)
            })
            .collect()
    }

    /// Filled shapes drawn after the header, bottom to top.
    #[must_use]
    pub fn body_fills(&self) -> Vec<Fill> {
        let mut fills = vec![Fill {
            path: self.layout.content_mask(),
            color: self.faded(palette::SURFACE),
        }];

        if let Some(path) = self.layout.button_row_mask() {
            fills.push(Fill {
                path,
                color: self.faded(self.separator_color),
            });
        }

        let faces = self.layout.cell_faces();
        for ((face, corners), color) in faces.into_iter().zip(&self.cell_colors) {
            fills.push(Fill {
                path: geometry::bottom_rect(face, self.layout.corner_radius, corners),
                color: self.faded(*color),
            });
        }

        fills
    }
}

impl<Message> canvas::Program<Message> for Chrome<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.translate(Vector::new(self.margin, self.margin));

        let outline = geometry::to_path(&self.layout.shadow_outline());
        for (width, color) in self.shadow_strokes() {
            frame.stroke(&outline, Stroke::default().with_width(width).with_color(color));
        }

        self.header
            .draw(&mut frame, self.layout.header, self.category, self.opacity);

        for fill in self.body_fills() {
            frame.fill(&geometry::to_path(&fill.path), fill.color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::alert::header::BadgeHeader;

    fn chrome(actions: usize, opacity: f32) -> Chrome<'static> {
        Chrome::new(
            Layout::compute(22.0, 34.0, actions),
            AlertCategory::Warning,
            &BadgeHeader,
            palette::SEPARATOR,
            vec![palette::SURFACE; actions],
            opacity,
            shadow::RADIUS,
        )
    }

    #[test]
    fn no_actions_paints_only_the_content() {
        let fills = chrome(0, 1.0).body_fills();
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].color, palette::SURFACE);
    }

    #[test]
    fn actions_add_separator_and_one_face_each() {
        let fills = chrome(3, 1.0).body_fills();
        // Content, separator backing, three faces.
        assert_eq!(fills.len(), 5);
        assert_eq!(fills[1].color, palette::SEPARATOR);
    }

    #[test]
    fn opacity_scales_every_alpha() {
        let fills = chrome(2, 0.5).body_fills();
        for fill in &fills {
            assert!(fill.color.a <= 0.5);
        }
        assert_abs_diff_eq!(fills[0].color.a, palette::SURFACE.a * 0.5);
    }

    #[test]
    fn shadow_adds_up_to_its_full_alpha() {
        let strokes = chrome(1, 1.0).shadow_strokes();
        assert_eq!(strokes.len(), usize::from(shadow::STEPS));

        let total: f32 = strokes.iter().map(|(_, color)| color.a).sum();
        assert_abs_diff_eq!(total, opacity::SHADOW, epsilon = 1e-5);

        let widest = strokes.iter().map(|(width, _)| *width).fold(0.0, f32::max);
        assert_abs_diff_eq!(widest, 2.0 * shadow::RADIUS);
    }
}
