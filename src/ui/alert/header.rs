// SPDX-License-Identifier: MPL-2.0
//! Category header drawing.
//!
//! The alert core only knows its [`AlertCategory`]. Which color and which
//! glyph that maps to is up to the [`HeaderRenderer`] the host was built with.

use super::category::AlertCategory;
use super::geometry;
use crate::config::{CORNER_RADIUS, HEADER_SLANT, POPUP_WIDTH};
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point, Rectangle};
use std::fmt;

/// Draws the colored header band of an alert card.
pub trait HeaderRenderer: fmt::Debug {
    /// Fill color of the header for `category`.
    fn accent(&self, category: AlertCategory) -> Color;

    /// Draws the header into `bounds`, with every alpha multiplied by
    /// `opacity`.
    fn draw(&self, frame: &mut Frame, bounds: Rectangle, category: AlertCategory, opacity: f32);
}

/// Glyph drawn in the middle of the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Open polylines, stroked with round caps.
    pub strokes: Vec<Vec<Point>>,
    /// Filled dots.
    pub dots: Vec<Point>,
    pub line_width: f32,
}

impl Glyph {
    /// Glyph for `category`, fitted in a square of side `size` around `center`.
    #[must_use]
    pub fn for_category(category: AlertCategory, center: Point, size: f32) -> Self {
        let h = size / 2.0;
        let at = |dx: f32, dy: f32| Point::new(center.x + dx * h, center.y + dy * h);

        let (strokes, dots) = match category {
            AlertCategory::Error => (
                vec![vec![at(-0.7, -0.7), at(0.7, 0.7)], vec![at(0.7, -0.7), at(-0.7, 0.7)]],
                Vec::new(),
            ),
            AlertCategory::Warning => (
                vec![vec![at(0.0, -1.0), at(0.0, 0.35)]],
                vec![at(0.0, 0.85)],
            ),
            AlertCategory::Success => (
                vec![vec![at(-0.8, 0.0), at(-0.25, 0.6), at(0.8, -0.6)]],
                Vec::new(),
            ),
            AlertCategory::Notification => {
                (vec![vec![at(0.0, -0.25), at(0.0, 1.0)]], vec![at(0.0, -0.8)])
            }
        };

        Self {
            strokes,
            dots,
            line_width: (size / 8.0).max(1.0),
        }
    }
}

/// Default header: a semantic color band with a white glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeHeader;

impl HeaderRenderer for BadgeHeader {
    fn accent(&self, category: AlertCategory) -> Color {
        match category {
            AlertCategory::Error => palette::ERROR_500,
            AlertCategory::Warning => palette::WARNING_500,
            AlertCategory::Success => palette::SUCCESS_500,
            AlertCategory::Notification => palette::INFO_500,
        }
    }

    fn draw(&self, frame: &mut Frame, bounds: Rectangle, category: AlertCategory, opacity: f32) {
        let scale = bounds.width / POPUP_WIDTH;
        let slant = HEADER_SLANT * scale;
        let radius = CORNER_RADIUS * scale;

        let accent = self.accent(category);
        let band = geometry::to_path(&geometry::header_outline(bounds, slant, radius));
        frame.fill(
            &band,
            Color {
                a: accent.a * opacity,
                ..accent
            },
        );

        let center = Point::new(
            bounds.x + bounds.width / 2.0,
            bounds.y + (bounds.height - slant) / 2.0,
        );
        let glyph = Glyph::for_category(category, center, bounds.height * 0.4);
        let ink = Color {
            a: opacity,
            ..palette::WHITE
        };

        for stroke in &glyph.strokes {
            let path = Path::new(|builder| {
                let mut points = stroke.iter();
                if let Some(first) = points.next() {
                    builder.move_to(*first);
                    for point in points {
                        builder.line_to(*point);
                    }
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(glyph.line_width)
                    .with_color(ink)
                    .with_line_cap(canvas::LineCap::Round)
                    .with_line_join(canvas::LineJoin::Round),
            );
        }
        for dot in &glyph.dots {
            frame.fill(&Path::circle(*dot, glyph.line_width * 0.75), ink);
        }
    }
}
