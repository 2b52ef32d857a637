//! Light/dark color scheme

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The two schemes a toggle switches between
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// The opposite scheme
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_an_involution() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_ne!(scheme.toggled(), scheme);
            assert_eq!(scheme.toggled().toggled(), scheme);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(ColorScheme::parse(" Dark "), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::parse("oled"), None);
        assert_eq!(ColorScheme::from_dark(false).to_string(), "light");
    }
}
