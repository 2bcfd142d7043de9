//! The light/dark preference value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's preferred color mode.
///
/// There are exactly two variants. The textual form (`"light"` / `"dark"`)
/// is what gets written to the persisted slot and what is applied to the
/// presentation root as a class marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Both variants, in declaration order.
    pub const ALL: [ThemePreference; 2] = [ThemePreference::Light, ThemePreference::Dark];

    /// Returns the textual form stored in the slot.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Returns the class marker applied to the presentation root.
    pub fn marker(self) -> &'static str {
        self.as_str()
    }

    /// Returns the other variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrativenet::ThemePreference;
    ///
    /// assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    /// assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the two preference names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a theme preference (expected 'light' or 'dark')")]
pub struct ParsePreferenceError {
    pub value: String,
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    /// Parses the exact lowercase name. The browser only ever writes these
    /// two strings, so anything else is treated as foreign data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ParsePreferenceError {
                value: other.to_string(),
            }),
        }
    }
}
