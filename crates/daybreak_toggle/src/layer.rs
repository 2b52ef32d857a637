//! Toggle layers and their animated properties
//!
//! The toggle is drawn as a stack of layers, back to front:
//!
//! ```text
//! Button ─┬─ Track        two-sided background sliding with the thumb
//!         ├─ Shimmer      hover-only highlight sweep
//!         ├─ HintSun      fixed hint icon, left
//!         ├─ HintMoon     fixed hint icon, right
//!         └─ Thumb ─┬─ SunIcon
//!                   └─ MoonIcon
//! ```
//!
//! Each animated (layer, property) pair is one [`Channel`] of the animator.

use daybreak_theme::ColorToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A drawable layer of the toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// The whole control; only its press scale animates
    Button,
    Track,
    Shimmer,
    HintSun,
    HintMoon,
    Thumb,
    SunIcon,
    MoonIcon,
}

impl Layer {
    /// Every layer, back to front
    pub const ALL: [Layer; 8] = [
        Layer::Button,
        Layer::Track,
        Layer::Shimmer,
        Layer::HintSun,
        Layer::HintMoon,
        Layer::Thumb,
        Layer::SunIcon,
        Layer::MoonIcon,
    ];

    /// Properties the animator drives for this layer
    pub fn properties(self) -> &'static [Property] {
        match self {
            Layer::Button => &[Property::Scale],
            Layer::Track | Layer::Thumb => &[Property::X],
            Layer::Shimmer => &[Property::X, Property::Opacity],
            Layer::HintSun | Layer::HintMoon => &[Property::Opacity, Property::Scale],
            Layer::SunIcon | Layer::MoonIcon => {
                &[Property::Rotate, Property::Opacity, Property::Scale]
            }
        }
    }

    /// Palette token this layer is painted with
    pub fn fill_token(self) -> ColorToken {
        match self {
            Layer::Button => ColorToken::FocusRing,
            Layer::Track => ColorToken::TrackBackground,
            Layer::Shimmer => ColorToken::Shimmer,
            Layer::HintSun | Layer::HintMoon => ColorToken::HintIcon,
            Layer::Thumb => ColorToken::Thumb,
            Layer::SunIcon | Layer::MoonIcon => ColorToken::ThumbIcon,
        }
    }

    /// Lucide glyph drawn by icon layers
    pub fn glyph_name(self) -> Option<&'static str> {
        match self {
            Layer::HintSun | Layer::SunIcon => Some("sun"),
            Layer::HintMoon | Layer::MoonIcon => Some("moon"),
            Layer::Button | Layer::Track | Layer::Shimmer | Layer::Thumb => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Button => "button",
            Layer::Track => "track",
            Layer::Shimmer => "shimmer",
            Layer::HintSun => "hint_sun",
            Layer::HintMoon => "hint_moon",
            Layer::Thumb => "thumb",
            Layer::SunIcon => "sun_icon",
            Layer::MoonIcon => "moon_icon",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An animatable property of a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Horizontal offset in pixels
    X,
    Opacity,
    /// Rotation in degrees
    Rotate,
    Scale,
}

impl Property {
    pub fn as_str(self) -> &'static str {
        match self {
            Property::X => "x",
            Property::Opacity => "opacity",
            Property::Rotate => "rotate",
            Property::Scale => "scale",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One animated (layer, property) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Channel {
    pub layer: Layer,
    pub property: Property,
}

impl Channel {
    pub const fn new(layer: Layer, property: Property) -> Self {
        Self { layer, property }
    }

    /// Every channel of the toggle, back to front
    pub fn all() -> impl Iterator<Item = Channel> {
        Layer::ALL.into_iter().flat_map(|layer| {
            layer
                .properties()
                .iter()
                .map(move |&property| Channel::new(layer, property))
        })
    }

    /// Whether `property` is animated on `layer` at all
    pub fn is_valid(self) -> bool {
        self.layer.properties().contains(&self.property)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.layer, self.property)
    }
}
