// SPDX-License-Identifier: MPL-2.0
//! Path geometry for the card's masks and shadow.
//!
//! Shapes are built as plain [`PathCommand`] lists so they can be inspected in
//! tests. [`to_path`] turns them into canvas paths for drawing.

use iced::widget::canvas::Path;
use iced::{Point, Rectangle};

/// One step of a path outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Line toward `corner`, then an arc of `radius` tangent to both
    /// `current → corner` and `corner → toward`.
    ArcTo {
        corner: Point,
        toward: Point,
        radius: f32,
    },
    Close,
}

/// Which bottom corners of a rectangle are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomCorners {
    pub left: bool,
    pub right: bool,
}

impl BottomCorners {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };
}

/// Rectangle with square top corners and rounded bottom corners.
#[must_use]
pub fn rounded_bottom_rect(rect: Rectangle, radius: f32) -> Vec<PathCommand> {
    bottom_rect(rect, radius, BottomCorners::BOTH)
}

/// Rectangle whose selected bottom corners are rounded.
///
/// The radius is clamped to half of the rectangle's smaller side.
#[must_use]
pub fn bottom_rect(rect: Rectangle, radius: f32, corners: BottomCorners) -> Vec<PathCommand> {
    let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let left = rect.x;
    let right = rect.x + rect.width;
    let top = rect.y;
    let bottom = rect.y + rect.height;

    let mut commands = vec![
        PathCommand::MoveTo(Point::new(left, top)),
        PathCommand::LineTo(Point::new(right, top)),
    ];

    commands.push(corner(
        Point::new(right, bottom),
        Point::new(left, bottom),
        radius,
        corners.right,
    ));
    commands.push(corner(
        Point::new(left, bottom),
        Point::new(left, top),
        radius,
        corners.left,
    ));
    commands.push(PathCommand::Close);
    commands
}

/// Header shape: rounded top corners and a bottom edge that rises by `slant`
/// from left to right.
#[must_use]
pub fn header_outline(bounds: Rectangle, slant: f32, top_radius: f32) -> Vec<PathCommand> {
    let radius = top_radius
        .min(bounds.width / 2.0)
        .min((bounds.height - slant) / 2.0)
        .max(0.0);
    let left = bounds.x;
    let right = bounds.x + bounds.width;
    let top = bounds.y;
    let bottom = bounds.y + bounds.height;

    vec![
        PathCommand::MoveTo(Point::new(left, bottom)),
        corner(Point::new(left, top), Point::new(right, top), radius, true),
        corner(
            Point::new(right, top),
            Point::new(right, bottom - slant),
            radius,
            true,
        ),
        PathCommand::LineTo(Point::new(right, bottom - slant)),
        PathCommand::Close,
    ]
}

/// The four corners of the card shadow when actions exist.
///
/// The outline skips the header's top half and follows its slanted bottom
/// edge, from `(0, header_height)` to `(width, header_height - slant)`.
#[must_use]
pub fn shadow_outline(width: f32, height: f32, header_height: f32, slant: f32) -> [Point; 4] {
    [
        Point::new(0.0, height),
        Point::new(0.0, header_height),
        Point::new(width, header_height - slant),
        Point::new(width, height),
    ]
}

/// Closed polygon through `points`.
#[must_use]
pub fn polygon(points: &[Point]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len() + 1);
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        commands.push(PathCommand::MoveTo(*first));
        commands.extend(iter.map(|point| PathCommand::LineTo(*point)));
        commands.push(PathCommand::Close);
    }
    commands
}

/// Builds a canvas path from commands.
#[must_use]
pub fn to_path(commands: &[PathCommand]) -> Path {
    Path::new(|builder| {
        for command in commands {
            match *command {
                PathCommand::MoveTo(p) => builder.move_to(p),
                PathCommand::LineTo(p) => builder.line_to(p),
                PathCommand::ArcTo {
                    corner,
                    toward,
                    radius,
                } => builder.arc_to(corner, toward, radius),
                PathCommand::Close => builder.close(),
            }
        }
    })
}

fn corner(corner: Point, toward: Point, radius: f32, rounded: bool) -> PathCommand {
    if rounded && radius > 0.0 {
        PathCommand::ArcTo {
            corner,
            toward,
            radius,
        }
    } else {
        PathCommand::LineTo(corner)
    }
}
