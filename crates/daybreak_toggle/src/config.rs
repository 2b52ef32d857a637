//! Toggle configuration
//!
//! Every section is optional; a missing section keeps its defaults.
//!
//! ```toml
//! [geometry]
//! track_width = 128.0
//!
//! [motion]
//! thumb_damping = 14.0
//!
//! [theme]
//! marker = "dark"
//! preset = "zinc"
//!
//! [labels]
//! locale = "en"
//! ```

use crate::error::{ConfigError, Result};
use crate::geometry::ToggleGeometry;
use crate::labels::{Labels, Locale};
use crate::motion::MotionConfig;
use daybreak_theme::{ThemeBundle, ThemePreset, DARK_MARKER};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub geometry: ToggleGeometry,
    pub motion: MotionConfig,
    pub theme: ThemeConfig,
    pub labels: LabelConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Root class toggled for dark mode
    pub marker: String,
    /// Built-in palette id
    pub preset: String,
    /// Palette overrides file, relative to the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            marker: DARK_MARKER.to_string(),
            preset: ThemePreset::default().id().to_string(),
            palette: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub locale: Locale,
}

impl ToggleConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(input: &str) -> Result<Self> {
        let config: ToggleConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        self.motion.validate()?;

        let marker = &self.theme.marker;
        if marker.is_empty() || marker.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid(
                "theme.marker",
                format!("`{marker}` is not a single class name"),
            ));
        }
        self.preset()?;
        Ok(())
    }

    pub fn preset(&self) -> Result<ThemePreset> {
        Ok(self.theme.preset.parse::<ThemePreset>()?)
    }

    /// Palette bundle of the configured preset, without overrides
    pub fn bundle(&self) -> Result<ThemeBundle> {
        Ok(self.preset()?.bundle())
    }

    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.labels.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybreak_theme::ThemeError;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ToggleConfig::from_toml("").unwrap(), ToggleConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ToggleConfig::from_toml(
            r#"
            [motion]
            thumb_damping = 20.0

            [labels]
            locale = "en"
            "#,
        )
        .unwrap();

        assert_eq!(config.motion.thumb_damping, 20.0);
        assert_eq!(config.motion.thumb_stiffness, 100.0);
        assert_eq!(config.labels.locale, Locale::En);
        assert_eq!(config.geometry, ToggleGeometry::default());
    }

    #[test]
    fn test_marker_must_be_one_class() {
        let err = ToggleConfig::from_toml("[theme]\nmarker = \"dark mode\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "theme.marker", .. }));
    }

    #[test]
    fn test_unknown_preset() {
        let err = ToggleConfig::from_toml("[theme]\npreset = \"slate\"").unwrap_err();
        assert!(matches!(err, ConfigError::Theme(ThemeError::UnknownPreset(_))));
    }

    #[test]
    fn test_serialized_default_parses_back() {
        let text = toml::to_string(&ToggleConfig::default()).unwrap();
        assert_eq!(ToggleConfig::from_toml(&text).unwrap(), ToggleConfig::default());
    }
}
