//! Built-in palettes derived from Tailwind gray scales.

use crate::bundle::ThemeBundle;
use crate::error::ThemeError;
use crate::tokens::ColorTokens;
use daybreak_core::Color;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Cool gray with a blue cast; the toggle's stock look.
    #[default]
    Zinc,
    /// True neutral gray.
    Neutral,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Zinc => "Zinc",
            Self::Neutral => "Neutral",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Zinc, ThemePreset::Neutral];
        &PRESETS
    }

    /// Build a light/dark theme bundle for this preset.
    pub fn bundle(self) -> ThemeBundle {
        let shades = match self {
            Self::Zinc => ZINC,
            Self::Neutral => NEUTRAL,
        };
        ThemeBundle::new(self.display_name(), light_tokens(&shades), dark_tokens(&shades))
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreset::all()
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}

/// The gray steps a toggle palette is built from
#[derive(Clone, Copy)]
struct Shades {
    s50: u32,
    s200: u32,
    s400: u32,
    s500: u32,
    s700: u32,
    s800: u32,
    s900: u32,
    s950: u32,
}

const ZINC: Shades = Shades {
    s50: 0xFAFAFA,
    s200: 0xE4E4E7,
    s400: 0xA1A1AA,
    s500: 0x71717A,
    s700: 0x3F3F46,
    s800: 0x27272A,
    s900: 0x18181B,
    s950: 0x09090B,
};

const NEUTRAL: Shades = Shades {
    s50: 0xFAFAFA,
    s200: 0xE5E5E5,
    s400: 0xA3A3A3,
    s500: 0x737373,
    s700: 0x404040,
    s800: 0x262626,
    s900: 0x171717,
    s950: 0x0A0A0A,
};

fn light_tokens(s: &Shades) -> ColorTokens {
    ColorTokens {
        page_background: Color::from_hex(s.s50),
        page_text: Color::from_hex(s.s900),
        caption: Color::from_hex(s.s400),
        track_background: Color::from_hex(s.s200),
        track_ring: Color::BLACK.with_alpha(0.05),
        track_light_side: Color::from_hex(s.s200),
        track_dark_side: Color::from_hex(s.s900),
        thumb: Color::WHITE,
        thumb_border: Color::from_hex(s.s200),
        thumb_icon: Color::from_hex(s.s900),
        hint_icon: Color::from_hex(s.s500),
        shimmer: Color::WHITE.with_alpha(0.4),
        focus_ring: Color::from_hex(s.s500),
    }
}

fn dark_tokens(s: &Shades) -> ColorTokens {
    ColorTokens {
        page_background: Color::from_hex(s.s950),
        page_text: Color::from_hex(s.s50),
        caption: Color::from_hex(s.s500),
        track_background: Color::from_hex(s.s900),
        track_ring: Color::WHITE.with_alpha(0.1),
        track_light_side: Color::from_hex(s.s200),
        track_dark_side: Color::from_hex(s.s900),
        thumb: Color::from_hex(s.s800),
        thumb_border: Color::from_hex(s.s700),
        thumb_icon: Color::from_hex(s.s50),
        hint_icon: Color::from_hex(s.s400),
        shimmer: Color::WHITE.with_alpha(0.1),
        focus_ring: Color::from_hex(s.s500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup_is_case_insensitive() {
        assert_eq!("ZINC".parse::<ThemePreset>().unwrap(), ThemePreset::Zinc);
        assert_eq!(" neutral".parse::<ThemePreset>().unwrap(), ThemePreset::Neutral);
        assert!(matches!(
            "slate".parse::<ThemePreset>(),
            Err(ThemeError::UnknownPreset(_))
        ));
    }
}
