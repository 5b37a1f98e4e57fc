// SPDX-License-Identifier: MPL-2.0
//! Semantic category of an alert.

use std::fmt;
use std::str::FromStr;

/// Semantic alert category.
///
/// A pure tag: the accent color and glyph for each category come from the
/// [`HeaderRenderer`](super::HeaderRenderer), not from the alert itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertCategory {
    /// Something failed.
    Error,
    /// Something needs attention before continuing.
    Warning,
    /// An operation completed.
    Success,
    /// Plain information.
    #[default]
    Notification,
}

impl AlertCategory {
    /// All categories, in declaration order.
    pub const ALL: [AlertCategory; 4] = [
        AlertCategory::Error,
        AlertCategory::Warning,
        AlertCategory::Success,
        AlertCategory::Notification,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AlertCategory::Error => "error",
            AlertCategory::Warning => "warning",
            AlertCategory::Success => "success",
            AlertCategory::Notification => "notification",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlertCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown alert category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_notification() {
        assert_eq!(AlertCategory::default(), AlertCategory::Notification);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Warning".parse(), Ok(AlertCategory::Warning));
        assert_eq!(" error ".parse(), Ok(AlertCategory::Error));
        assert!("fatal".parse::<AlertCategory>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for category in AlertCategory::ALL {
            assert_eq!(category.to_string().parse(), Ok(category));
        }
    }
}
