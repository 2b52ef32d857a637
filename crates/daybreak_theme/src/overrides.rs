//! Per-scheme palette overrides loaded from TOML
//!
//! ```toml
//! [light]
//! thumb = "#ffffff"
//!
//! [dark]
//! track_background = "#111113"
//! shimmer = "#ffffff1a"
//! ```

use crate::error::{Result, ThemeError};
use crate::tokens::ColorToken;
use daybreak_core::Color;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOverrides {
    #[serde(default)]
    light: BTreeMap<String, String>,
    #[serde(default)]
    dark: BTreeMap<String, String>,
}

/// Validated color overrides for each scheme
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteOverrides {
    light: Vec<(ColorToken, Color)>,
    dark: Vec<(ColorToken, Color)>,
}

impl PaletteOverrides {
    /// Parse overrides from TOML text
    pub fn from_toml(input: &str) -> Result<Self> {
        let raw: RawOverrides = toml::from_str(input)?;
        Ok(Self {
            light: resolve(raw.light)?,
            dark: resolve(raw.dark)?,
        })
    }

    pub fn light(&self) -> &[(ColorToken, Color)] {
        &self.light
    }

    pub fn dark(&self) -> &[(ColorToken, Color)] {
        &self.dark
    }

    pub fn len(&self) -> usize {
        self.light.len() + self.dark.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn resolve(entries: BTreeMap<String, String>) -> Result<Vec<(ColorToken, Color)>> {
    entries
        .into_iter()
        .map(|(key, value)| {
            let token =
                ColorToken::from_key(&key).ok_or_else(|| ThemeError::UnknownToken(key.clone()))?;
            let color = Color::parse_hex(&value).ok_or(ThemeError::InvalidColor {
                token: key,
                value,
            })?;
            Ok((token, color))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let overrides = PaletteOverrides::from_toml(
            r##"
            [dark]
            thumb = "#3f3f46"
            shimmer = "#ffffff33"
            "##,
        )
        .unwrap();

        assert!(overrides.light().is_empty());
        assert_eq!(overrides.len(), 2);
        assert!(overrides
            .dark()
            .contains(&(ColorToken::Thumb, Color::from_hex(0x3f3f46))));
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = PaletteOverrides::from_toml("[light]\nprimary = \"#000000\"").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken(ref key) if key == "primary"));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = PaletteOverrides::from_toml("[light]\nthumb = \"white\"").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { .. }));
    }

    #[test]
    fn test_unknown_section_is_a_parse_error() {
        let err = PaletteOverrides::from_toml("[oled]\nthumb = \"#000\"").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }
}
