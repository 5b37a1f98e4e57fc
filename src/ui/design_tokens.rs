// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the alert's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Typography**: Font size scale
- **Radius**: Corner radii
- **Shadow**: Card shadow parameters

## Examples

```
use iced_alert::ui::design_tokens::{palette, opacity};
use iced::Color;

// Create the default separator color
let separator = Color {
    a: opacity::SEPARATOR,
    ..palette::CHARCOAL
};
assert_eq!(separator, iced_alert::ui::design_tokens::palette::SEPARATOR);
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on the alert layout and chrome
2. Keep the compile-time validation below passing
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::{opacity, Color};

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Base tone of the backdrop and the action separators, rgb(50, 51, 53).
    pub const CHARCOAL: Color = Color::from_rgb(50.0 / 255.0, 51.0 / 255.0, 53.0 / 255.0);

    /// Default action text color, rgb(27, 169, 225).
    pub const ACCENT_BLUE: Color = Color::from_rgb(27.0 / 255.0, 169.0 / 255.0, 225.0 / 255.0);

    /// Dim layer behind the popup card.
    pub const BACKDROP: Color = Color {
        a: opacity::BACKDROP,
        ..CHARCOAL
    };

    /// Hairline between action buttons.
    pub const SEPARATOR: Color = Color {
        a: opacity::SEPARATOR,
        ..CHARCOAL
    };

    /// Content and button surfaces.
    pub const SURFACE: Color = Color {
        a: opacity::SURFACE,
        ..WHITE
    };

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const HOVER: f32 = 0.04;
    pub const PRESSED: f32 = 0.08;
    pub const SEPARATOR: f32 = 0.12;
    pub const SHADOW: f32 = 0.2;
    pub const BACKDROP: f32 = 0.4;
    pub const SURFACE: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Gap between title and message.
    pub const CONTENT_GAP: f32 = 8.0;
    /// Inset of the content stack from the card's sides and bottom.
    pub const CONTENT_INSET: f32 = 16.0;
    /// Gap between action cells, and above the cells.
    pub const ACTION_GAP: f32 = 1.0;
    /// Padding around the demo window content.
    pub const PAGE: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Title label, bold.
    pub const TITLE: f32 = 17.0;

    /// Message label, regular.
    pub const MESSAGE: f32 = 13.0;

    /// Default action label size.
    pub const ACTION: f32 = 17.0;

    /// Demo window body text.
    pub const BODY: f32 = 14.0;

    /// Relative line height used by iced text by default.
    pub const LINE_HEIGHT: f32 = 1.3;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const CARD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    /// Blur radius of the card shadow.
    pub const RADIUS: f32 = 4.0;

    /// Number of strokes used to approximate the blur on a canvas.
    pub const STEPS: u8 = 4;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HOVER < opacity::PRESSED);
    assert!(opacity::PRESSED < opacity::SEPARATOR);
    assert!(opacity::SEPARATOR < opacity::SHADOW);
    assert!(opacity::SHADOW < opacity::BACKDROP);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE > typography::MESSAGE);
    assert!(typography::LINE_HEIGHT >= 1.0);

    // Spacing validation
    assert!(spacing::CONTENT_INSET > spacing::CONTENT_GAP);
    assert!(spacing::ACTION_GAP > 0.0);

    // Shadow validation
    assert!(shadow::RADIUS > 0.0);
    assert!(shadow::STEPS > 0);
};
