// SPDX-License-Identifier: MPL-2.0
//! Text measurement used to size the content region before it is rendered.
//!
//! The card's height depends on how many lines the title and message wrap to.
//! Widgets only learn their size during iced's layout pass, but the chrome
//! canvas and the fixed-size label containers need the numbers up front, so
//! the alert shapes each label as a standalone paragraph first.

use crate::ui::design_tokens::typography;
use iced::advanced::graphics::text::Paragraph;
use iced::advanced::text::{Alignment, LineHeight, Paragraph as _, Shaping, Text, Wrapping};
use iced::font::Weight;
use iced::{alignment, Font, Pixels, Size};

/// A font plus a point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typeface {
    pub font: Font,
    pub size: f32,
}

impl Typeface {
    /// Regular system font.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self {
            font: Font::DEFAULT,
            size,
        }
    }

    /// Bold system font.
    #[must_use]
    pub fn bold_system(size: f32) -> Self {
        Self {
            font: Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            },
            size,
        }
    }

    /// Typeface of the title label.
    #[must_use]
    pub fn title() -> Self {
        Self::bold_system(typography::TITLE)
    }

    /// Typeface of the message label.
    #[must_use]
    pub fn message() -> Self {
        Self::system(typography::MESSAGE)
    }

    /// Height of one line of text.
    #[must_use]
    pub fn line_height(self) -> f32 {
        self.size * typography::LINE_HEIGHT
    }

    /// Same font at `factor` times the size.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            size: self.size * factor,
            ..self
        }
    }

    fn is_bold(self) -> bool {
        matches!(
            self.font.weight,
            Weight::Semibold | Weight::Bold | Weight::ExtraBold | Weight::Black
        )
    }
}

impl Default for Typeface {
    fn default() -> Self {
        Self::system(typography::ACTION)
    }
}

/// How label heights are measured before the card is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextMetrics {
    /// Shapes the text with iced's text engine, the way the labels render.
    #[default]
    Shaped,
    /// Greedy word wrap with fixed average glyph advances. Needs no fonts,
    /// but underestimates wide glyphs.
    Estimated(AverageAdvance),
}

impl TextMetrics {
    /// Height `text` needs when wrapped inside `width`. Empty text needs none.
    #[must_use]
    pub fn height(&self, text: &str, typeface: Typeface, width: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self {
            Self::Shaped => shaped_height(text, typeface, width),
            Self::Estimated(advance) => advance.height(text, typeface, width),
        }
    }
}

/// Lays `text` out as a paragraph of at most `width` and returns its height.
fn shaped_height(text: &str, typeface: Typeface, width: f32) -> f32 {
    let paragraph = Paragraph::with_text(Text {
        content: text,
        bounds: Size::new(width, f32::INFINITY),
        size: Pixels(typeface.size),
        line_height: LineHeight::Relative(typography::LINE_HEIGHT),
        font: typeface.font,
        align_x: Alignment::Center,
        align_y: alignment::Vertical::Top,
        shaping: Shaping::default(),
        wrapping: Wrapping::default(),
    });
    paragraph.min_bounds().height
}

/// Average glyph advances, as a fraction of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageAdvance {
    pub advance_ratio: f32,
    pub bold_advance_ratio: f32,
}

impl Default for AverageAdvance {
    fn default() -> Self {
        Self {
            advance_ratio: 0.52,
            bold_advance_ratio: 0.58,
        }
    }
}

impl AverageAdvance {
    /// Average horizontal advance of one glyph.
    #[must_use]
    pub fn advance(&self, typeface: Typeface) -> f32 {
        let ratio = if typeface.is_bold() {
            self.bold_advance_ratio
        } else {
            self.advance_ratio
        };
        typeface.size * ratio
    }

    /// Number of lines `text` wraps to inside `width`.
    ///
    /// Words longer than a line are broken across as many lines as they need.
    /// Explicit newlines always start a new line. Empty text has no lines.
    #[must_use]
    pub fn line_count(&self, text: &str, typeface: Typeface, width: f32) -> usize {
        if text.is_empty() {
            return 0;
        }

        let advance = self.advance(typeface);
        if width <= advance {
            return text.chars().filter(|c| !c.is_whitespace()).count().max(1);
        }

        text.split('\n')
            .map(|paragraph| Self::paragraph_lines(paragraph, advance, width))
            .sum()
    }

    /// Height `text` needs when wrapped inside `width`.
    #[must_use]
    pub fn height(&self, text: &str, typeface: Typeface, width: f32) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let lines = self.line_count(text, typeface, width) as f32;
        lines * typeface.line_height()
    }

    #[allow(clippy::cast_precision_loss)]
    fn paragraph_lines(paragraph: &str, advance: f32, width: f32) -> usize {
        let mut lines = 1;
        let mut used = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count() as f32 * advance;

            if word_width > width {
                // Finish the current line, then break the word glyph by glyph.
                if used > 0.0 {
                    lines += 1;
                }
                let full = (word_width / width).floor();
                let rest = word_width - full * width;
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    lines += full as usize - 1;
                }
                if rest > 0.0 {
                    lines += 1;
                    used = rest;
                } else {
                    used = width;
                }
                continue;
            }

            let needed = if used > 0.0 {
                advance + word_width
            } else {
                word_width
            };

            if used + needed > width {
                lines += 1;
                used = word_width;
            } else {
                used += needed;
            }
        }

        lines
    }
}
