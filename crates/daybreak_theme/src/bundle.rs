//! Light/dark token pairs

use crate::overrides::PaletteOverrides;
use crate::scheme::ColorScheme;
use crate::tokens::{ColorToken, ColorTokens};
use daybreak_core::Color;

/// A named pair of light and dark color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    name: String,
    light: ColorTokens,
    dark: ColorTokens,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: ColorTokens, dark: ColorTokens) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokens for a scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &ColorTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Resolve a single token
    pub fn color(&self, scheme: ColorScheme, token: ColorToken) -> Color {
        self.for_scheme(scheme).get(token)
    }

    /// Apply per-scheme overrides on top of this bundle
    pub fn with_overrides(mut self, overrides: &PaletteOverrides) -> Self {
        for (token, color) in overrides.light() {
            self.light.set(*token, *color);
        }
        for (token, color) in overrides.dark() {
            self.dark.set(*token, *color);
        }
        if !overrides.is_empty() {
            tracing::debug!(bundle = %self.name, count = overrides.len(), "applied palette overrides");
        }
        self
    }
}
