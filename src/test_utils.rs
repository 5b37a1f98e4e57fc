// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Layout and animation values are `f32`; compare them with the `approx`
//! macros instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Epsilon for geometry comparisons.
pub const GEOMETRY_EPSILON: f32 = 1e-3;
