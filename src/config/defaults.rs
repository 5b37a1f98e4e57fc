// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the alert's fixed
//! geometry and for the defaults of the user-tunable settings.
//!
//! # Categories
//!
//! - **Card**: Popup width, header height and height cap
//! - **Labels**: Title and message height caps
//! - **Actions**: Action count cap and button row height
//! - **Animation**: Dismiss transition duration and end state

// ==========================================================================
// Card Geometry
// ==========================================================================

/// Fixed width of the popup card.
pub const POPUP_WIDTH: f32 = 256.0;

/// Maximum height of the popup card.
pub const MAX_POPUP_HEIGHT: f32 = 430.0;

/// Fixed height of the colored header.
pub const HEADER_HEIGHT: f32 = 56.0;

/// How much higher the header's bottom-right corner sits than its bottom-left one.
pub const HEADER_SLANT: f32 = 5.0;

/// Radius used for every rounded corner of the card.
pub const CORNER_RADIUS: f32 = 8.0;

// ==========================================================================
// Label Caps
// ==========================================================================

/// Maximum height of the title label before it clips.
pub const TITLE_MAX_HEIGHT: f32 = 100.0;

/// Maximum height of the message label before it clips.
pub const MESSAGE_MAX_HEIGHT: f32 = 290.0;

// ==========================================================================
// Actions
// ==========================================================================

/// Hard cap on the number of actions one alert can hold.
pub const MAX_ACTIONS: usize = 3;

/// Height of the button row when at least one action exists.
pub const BUTTON_ROW_HEIGHT: f32 = 44.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default dismiss transition duration (in milliseconds).
pub const DEFAULT_DISMISS_DURATION_MS: u64 = 200;

/// Minimum dismiss transition duration (in milliseconds).
pub const MIN_DISMISS_DURATION_MS: u64 = 50;

/// Maximum dismiss transition duration (in milliseconds).
pub const MAX_DISMISS_DURATION_MS: u64 = 2000;

/// Scale the card shrinks to by the end of the dismiss transition.
pub const DISMISS_END_SCALE: f32 = 0.5;

/// Interval between animation ticks while an alert is dismissing (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Card validation
    assert!(POPUP_WIDTH > 0.0);
    assert!(MAX_POPUP_HEIGHT > HEADER_HEIGHT + BUTTON_ROW_HEIGHT);
    assert!(HEADER_SLANT < HEADER_HEIGHT);
    assert!(CORNER_RADIUS * 2.0 <= BUTTON_ROW_HEIGHT);

    // Label validation
    assert!(TITLE_MAX_HEIGHT > 0.0);
    assert!(MESSAGE_MAX_HEIGHT > TITLE_MAX_HEIGHT);

    // Action validation
    assert!(MAX_ACTIONS > 0);

    // Animation validation
    assert!(MIN_DISMISS_DURATION_MS > 0);
    assert!(MAX_DISMISS_DURATION_MS >= MIN_DISMISS_DURATION_MS);
    assert!(DEFAULT_DISMISS_DURATION_MS >= MIN_DISMISS_DURATION_MS);
    assert!(DEFAULT_DISMISS_DURATION_MS <= MAX_DISMISS_DURATION_MS);
    assert!(DISMISS_END_SCALE > 0.0 && DISMISS_END_SCALE < 1.0);
    assert!(FRAME_INTERVAL_MS < MIN_DISMISS_DURATION_MS);
};
