//! Localized toggle strings

use daybreak_theme::ColorScheme;
use serde::{Deserialize, Serialize};

/// Supported label languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Text shown with or announced for the toggle
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Labels {
    /// Accessible name of the button
    pub aria_label: &'static str,
    /// Caption under the toggle
    pub caption: &'static str,
    pub heading_light: &'static str,
    pub heading_dark: &'static str,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ru => Self {
                aria_label: "Переключить тему",
                caption: "Динамический переключатель",
                heading_light: "Светлая тема",
                heading_dark: "Тёмная тема",
            },
            Locale::En => Self {
                aria_label: "Toggle theme",
                caption: "Dynamic switch",
                heading_light: "Light theme",
                heading_dark: "Dark theme",
            },
        }
    }

    /// Heading for the active scheme
    pub fn heading(&self, scheme: ColorScheme) -> &'static str {
        match scheme {
            ColorScheme::Light => self.heading_light,
            ColorScheme::Dark => self.heading_dark,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_is_default() {
        let labels = Labels::default();
        assert_eq!(labels.aria_label, "Переключить тему");
        assert_eq!(labels.heading(ColorScheme::Dark), "Тёмная тема");
    }

    #[test]
    fn test_english_headings() {
        let labels = Labels::for_locale(Locale::En);
        assert_eq!(labels.heading(ColorScheme::Light), "Light theme");
    }
}
