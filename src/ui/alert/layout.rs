// SPDX-License-Identifier: MPL-2.0
//! Card layout: how the popup splits into header, content and button row.
//!
//! All rectangles are in card-local coordinates, with the origin at the
//! card's top-left corner. The host centers the card in its surface.

use super::geometry::{self, BottomCorners, PathCommand};
use super::metrics::{TextMetrics, Typeface};
use crate::config::{
    BUTTON_ROW_HEIGHT, CORNER_RADIUS, HEADER_HEIGHT, HEADER_SLANT, MAX_POPUP_HEIGHT,
    MESSAGE_MAX_HEIGHT, POPUP_WIDTH, TITLE_MAX_HEIGHT,
};
use crate::ui::design_tokens::spacing;
use iced::{Point, Rectangle, Size};

/// Region whose bottom corners carry the card's rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundedRegion {
    /// No actions: the content region is the bottom of the card.
    Content,
    /// At least one action: the button row is the bottom of the card.
    ButtonRow,
}

/// Outline used for the card's drop shadow.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowShape {
    /// Follows the header's slanted bottom edge down to the card bottom.
    Slanted([Point; 4]),
    /// The card rectangle with rounded bottom corners.
    RoundedCard(Rectangle),
}

/// Resolved geometry of one alert card.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub card: Rectangle,
    pub header: Rectangle,
    pub content: Rectangle,
    pub title: Rectangle,
    pub message: Rectangle,
    pub button_row: Rectangle,
    /// One equal-width cell per action, left to right.
    pub cells: Vec<Rectangle>,
    /// Strips where the separator color shows through.
    pub separators: Vec<Rectangle>,
    pub rounded: RoundedRegion,
    pub shadow: ShadowShape,
    pub corner_radius: f32,
    pub header_slant: f32,
    pub content_gap: f32,
    pub content_inset: f32,
    pub action_gap: f32,
}

/// Height of the button row for `action_count` actions.
#[must_use]
pub fn button_row_height(action_count: usize) -> f32 {
    if action_count > 0 {
        BUTTON_ROW_HEIGHT
    } else {
        0.0
    }
}

/// Width available to the title and message labels.
#[must_use]
pub fn label_width() -> f32 {
    POPUP_WIDTH - 2.0 * spacing::CONTENT_INSET
}

impl Layout {
    /// Measures `title` and `message` and lays out the card.
    #[must_use]
    pub fn measure(
        title: Option<&str>,
        message: Option<&str>,
        action_count: usize,
        metrics: &TextMetrics,
    ) -> Self {
        let width = label_width();
        let title_height = metrics.height(title.unwrap_or_default(), Typeface::title(), width);
        let message_height =
            metrics.height(message.unwrap_or_default(), Typeface::message(), width);
        Self::compute(title_height, message_height, action_count)
    }

    /// Lays out the card for labels that want the given heights.
    ///
    /// Each label is capped first (100 for the title, 290 for the message).
    /// If the card would still exceed its 430 cap, the message gives up
    /// height, then the title.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(title_height: f32, message_height: f32, action_count: usize) -> Self {
        let width = POPUP_WIDTH;
        let gap = spacing::CONTENT_GAP;
        let inset = spacing::CONTENT_INSET;
        let buttons_height = button_row_height(action_count);

        let mut title_h = title_height.clamp(0.0, TITLE_MAX_HEIGHT);
        let mut message_h = message_height.clamp(0.0, MESSAGE_MAX_HEIGHT);

        let fixed = HEADER_HEIGHT + gap + inset + buttons_height;
        let overflow = (fixed + title_h + message_h - MAX_POPUP_HEIGHT).max(0.0);
        let from_message = overflow.min(message_h);
        message_h -= from_message;
        title_h -= (overflow - from_message).min(title_h);

        let content_h = title_h + gap + message_h + inset;
        let card_h = HEADER_HEIGHT + content_h + buttons_height;

        let card = Rectangle::new(Point::ORIGIN, Size::new(width, card_h));
        let header = Rectangle::new(Point::ORIGIN, Size::new(width, HEADER_HEIGHT));
        let content = Rectangle::new(Point::new(0.0, HEADER_HEIGHT), Size::new(width, content_h));
        let title = Rectangle::new(
            Point::new(inset, content.y),
            Size::new(width - 2.0 * inset, title_h),
        );
        let message = Rectangle::new(
            Point::new(inset, title.y + title_h + gap),
            Size::new(width - 2.0 * inset, message_h),
        );
        let button_row = Rectangle::new(
            Point::new(0.0, content.y + content_h),
            Size::new(width, buttons_height),
        );

        let action_gap = spacing::ACTION_GAP;
        let mut cells = Vec::with_capacity(action_count);
        let mut separators = Vec::new();
        if action_count > 0 {
            let cell_width = width / action_count as f32;
            let cell_height = buttons_height - action_gap;
            let cell_top = button_row.y + action_gap;

            separators.push(Rectangle::new(
                button_row.position(),
                Size::new(width, action_gap),
            ));

            for i in 0..action_count {
                let x = cell_width * i as f32;
                cells.push(Rectangle::new(
                    Point::new(x, cell_top),
                    Size::new(cell_width, cell_height),
                ));
                if i > 0 {
                    separators.push(Rectangle::new(
                        Point::new(x, cell_top),
                        Size::new(action_gap, cell_height),
                    ));
                }
            }
        }

        let (rounded, shadow) = if action_count > 0 {
            (
                RoundedRegion::ButtonRow,
                ShadowShape::Slanted(geometry::shadow_outline(
                    width,
                    card_h,
                    HEADER_HEIGHT,
                    HEADER_SLANT,
                )),
            )
        } else {
            (RoundedRegion::Content, ShadowShape::RoundedCard(card))
        };

        Self {
            card,
            header,
            content,
            title,
            message,
            button_row,
            cells,
            separators,
            rounded,
            shadow,
            corner_radius: CORNER_RADIUS,
            header_slant: HEADER_SLANT,
            content_gap: gap,
            content_inset: inset,
            action_gap,
        }
    }

    /// Number of action cells.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.cells.len()
    }

    /// Visible face of each cell: the cell minus the separator on its
    /// leading edge, with the bottom corners that touch the card's rounded
    /// bottom marked.
    #[must_use]
    pub fn cell_faces(&self) -> Vec<(Rectangle, BottomCorners)> {
        let last = self.cells.len().saturating_sub(1);
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let lead = if i > 0 { self.action_gap } else { 0.0 };
                let face = Rectangle::new(
                    Point::new(cell.x + lead, cell.y),
                    Size::new(cell.width - lead, cell.height),
                );
                let corners = BottomCorners {
                    left: i == 0,
                    right: i == last,
                };
                (face, corners)
            })
            .collect()
    }

    /// Mask of the content region.
    #[must_use]
    pub fn content_mask(&self) -> Vec<PathCommand> {
        match self.rounded {
            RoundedRegion::Content => {
                geometry::rounded_bottom_rect(self.content, self.corner_radius)
            }
            RoundedRegion::ButtonRow => {
                geometry::bottom_rect(self.content, self.corner_radius, BottomCorners::NONE)
            }
        }
    }

    /// Mask of the button row, if there is one.
    #[must_use]
    pub fn button_row_mask(&self) -> Option<Vec<PathCommand>> {
        (self.rounded == RoundedRegion::ButtonRow)
            .then(|| geometry::rounded_bottom_rect(self.button_row, self.corner_radius))
    }

    /// Outline of the drop shadow.
    #[must_use]
    pub fn shadow_outline(&self) -> Vec<PathCommand> {
        match &self.shadow {
            ShadowShape::Slanted(points) => geometry::polygon(points),
            ShadowShape::RoundedCard(card) => {
                geometry::rounded_bottom_rect(*card, self.corner_radius)
            }
        }
    }

    /// Same layout with every length multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        let rect = |r: Rectangle| {
            Rectangle::new(
                Point::new(r.x * factor, r.y * factor),
                Size::new(r.width * factor, r.height * factor),
            )
        };
        let shadow = match &self.shadow {
            ShadowShape::Slanted(points) => {
                ShadowShape::Slanted(points.map(|p| Point::new(p.x * factor, p.y * factor)))
            }
            ShadowShape::RoundedCard(card) => ShadowShape::RoundedCard(rect(*card)),
        };

        Self {
            card: rect(self.card),
            header: rect(self.header),
            content: rect(self.content),
            title: rect(self.title),
            message: rect(self.message),
            button_row: rect(self.button_row),
            cells: self.cells.iter().copied().map(rect).collect(),
            separators: self.separators.iter().copied().map(rect).collect(),
            rounded: self.rounded,
            shadow,
            corner_radius: self.corner_radius * factor,
            header_slant: self.header_slant * factor,
            content_gap: self.content_gap * factor,
            content_inset: self.content_inset * factor,
            action_gap: self.action_gap * factor,
        }
    }
}
