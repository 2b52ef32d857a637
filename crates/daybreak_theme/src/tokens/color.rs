//! Color tokens for theming

use daybreak_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Page surfaces
    PageBackground,
    PageText,
    Caption,

    // Track
    TrackBackground,
    TrackRing,
    TrackLightSide,
    TrackDarkSide,

    // Thumb
    Thumb,
    ThumbBorder,
    ThumbIcon,

    // Decoration
    HintIcon,
    Shimmer,
    FocusRing,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 13] = [
        ColorToken::PageBackground,
        ColorToken::PageText,
        ColorToken::Caption,
        ColorToken::TrackBackground,
        ColorToken::TrackRing,
        ColorToken::TrackLightSide,
        ColorToken::TrackDarkSide,
        ColorToken::Thumb,
        ColorToken::ThumbBorder,
        ColorToken::ThumbIcon,
        ColorToken::HintIcon,
        ColorToken::Shimmer,
        ColorToken::FocusRing,
    ];

    /// Snake-case key used in config files
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::PageBackground => "page_background",
            ColorToken::PageText => "page_text",
            ColorToken::Caption => "caption",
            ColorToken::TrackBackground => "track_background",
            ColorToken::TrackRing => "track_ring",
            ColorToken::TrackLightSide => "track_light_side",
            ColorToken::TrackDarkSide => "track_dark_side",
            ColorToken::Thumb => "thumb",
            ColorToken::ThumbBorder => "thumb_border",
            ColorToken::ThumbIcon => "thumb_icon",
            ColorToken::HintIcon => "hint_icon",
            ColorToken::Shimmer => "shimmer",
            ColorToken::FocusRing => "focus_ring",
        }
    }

    pub fn from_key(key: &str) -> Option<ColorToken> {
        ColorToken::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Complete set of color tokens for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub page_background: Color,
    pub page_text: Color,
    pub caption: Color,

    pub track_background: Color,
    pub track_ring: Color,
    /// Left half of the sliding background graphic
    pub track_light_side: Color,
    /// Right half of the sliding background graphic
    pub track_dark_side: Color,

    pub thumb: Color,
    pub thumb_border: Color,
    pub thumb_icon: Color,

    /// Fixed hint icon on the side the thumb is not covering
    pub hint_icon: Color,
    pub shimmer: Color,
    pub focus_ring: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::PageBackground => self.page_background,
            ColorToken::PageText => self.page_text,
            ColorToken::Caption => self.caption,
            ColorToken::TrackBackground => self.track_background,
            ColorToken::TrackRing => self.track_ring,
            ColorToken::TrackLightSide => self.track_light_side,
            ColorToken::TrackDarkSide => self.track_dark_side,
            ColorToken::Thumb => self.thumb,
            ColorToken::ThumbBorder => self.thumb_border,
            ColorToken::ThumbIcon => self.thumb_icon,
            ColorToken::HintIcon => self.hint_icon,
            ColorToken::Shimmer => self.shimmer,
            ColorToken::FocusRing => self.focus_ring,
        }
    }

    /// Replace a color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::PageBackground => &mut self.page_background,
            ColorToken::PageText => &mut self.page_text,
            ColorToken::Caption => &mut self.caption,
            ColorToken::TrackBackground => &mut self.track_background,
            ColorToken::TrackRing => &mut self.track_ring,
            ColorToken::TrackLightSide => &mut self.track_light_side,
            ColorToken::TrackDarkSide => &mut self.track_dark_side,
            ColorToken::Thumb => &mut self.thumb,
            ColorToken::ThumbBorder => &mut self.thumb_border,
            ColorToken::ThumbIcon => &mut self.thumb_icon,
            ColorToken::HintIcon => &mut self.hint_icon,
            ColorToken::Shimmer => &mut self.shimmer,
            ColorToken::FocusRing => &mut self.focus_ring,
        };
        *slot = color;
    }
}
