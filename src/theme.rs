//! Color theme shared by the counter and preferences stores.
//!
//! Sharing the value type keeps the two stores speaking the same theme
//! vocabulary without coupling their state.

use serde::{Deserialize, Serialize};

/// Site color theme. Serialized in lowercase ("light" / "dark").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a user-supplied theme name.
    ///
    /// Only the exact strings `"light"` and `"dark"` are recognized;
    /// anything else returns `None` so callers can ignore bad input.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
