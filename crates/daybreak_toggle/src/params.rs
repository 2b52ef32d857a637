//! Mapping from toggle state to visual parameters
//!
//! [`derive_params`] is the single source of truth for what every
//! theme-dependent layer looks like in each state. It is pure: the same
//! `(is_dark, geometry)` always yields a bit-identical [`ParameterSet`].

use crate::geometry::ToggleGeometry;
use crate::layer::{Channel, Layer, Property};
use crate::motion::MotionConfig;
use daybreak_animation::AnimationTarget;
use daybreak_theme::{ColorScheme, ColorToken};
use serde::Serialize;

/// Opacity and scale of a fixed hint icon
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HintPose {
    pub opacity: f32,
    pub scale: f32,
}

/// Rotation (degrees), opacity and scale of an icon on the thumb
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IconPose {
    pub rotate: f32,
    pub opacity: f32,
    pub scale: f32,
}

const HINT_SHOWN: HintPose = HintPose {
    opacity: 0.4,
    scale: 1.0,
};

const HINT_HIDDEN: HintPose = HintPose {
    opacity: 0.0,
    scale: 0.5,
};

/// All theme-dependent targets for one toggle state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParameterSet {
    /// Palette every layer paints from
    pub scheme: ColorScheme,
    pub track_x: f32,
    pub thumb_x: f32,
    pub hint_sun: HintPose,
    pub hint_moon: HintPose,
    pub sun_icon: IconPose,
    pub moon_icon: IconPose,
}

/// Map a toggle state to its visual parameters.
///
/// Each hint icon previews the state the toggle would switch to, so it is
/// shown only while the thumb sits on the opposite side. The foreground
/// icons flip like a coin: the sun spins out to -180 degrees as the moon
/// spins in from 180.
pub fn derive_params(is_dark: bool, geometry: &ToggleGeometry) -> ParameterSet {
    let (hint_sun, hint_moon) = if is_dark {
        (HINT_SHOWN, HINT_HIDDEN)
    } else {
        (HINT_HIDDEN, HINT_SHOWN)
    };

    let (sun_icon, moon_icon) = if is_dark {
        (
            IconPose {
                rotate: -180.0,
                opacity: 0.0,
                scale: 0.3,
            },
            IconPose {
                rotate: 0.0,
                opacity: 1.0,
                scale: 1.0,
            },
        )
    } else {
        (
            IconPose {
                rotate: 0.0,
                opacity: 1.0,
                scale: 1.0,
            },
            IconPose {
                rotate: 180.0,
                opacity: 0.0,
                scale: 0.3,
            },
        )
    };

    ParameterSet {
        scheme: ColorScheme::from_dark(is_dark),
        track_x: geometry.track_offset(is_dark),
        thumb_x: geometry.thumb_offset(is_dark),
        hint_sun,
        hint_moon,
        sun_icon,
        moon_icon,
    }
}

impl ParameterSet {
    /// Target value of a theme-dependent channel.
    ///
    /// `None` for channels that do not depend on the theme (shimmer, press).
    pub fn value(&self, channel: Channel) -> Option<f32> {
        let hint = |pose: &HintPose| match channel.property {
            Property::Opacity => Some(pose.opacity),
            Property::Scale => Some(pose.scale),
            _ => None,
        };
        let icon = |pose: &IconPose| match channel.property {
            Property::Rotate => Some(pose.rotate),
            Property::Opacity => Some(pose.opacity),
            Property::Scale => Some(pose.scale),
            Property::X => None,
        };

        match (channel.layer, channel.property) {
            (Layer::Track, Property::X) => Some(self.track_x),
            (Layer::Thumb, Property::X) => Some(self.thumb_x),
            (Layer::HintSun, _) => hint(&self.hint_sun),
            (Layer::HintMoon, _) => hint(&self.hint_moon),
            (Layer::SunIcon, _) => icon(&self.sun_icon),
            (Layer::MoonIcon, _) => icon(&self.moon_icon),
            _ => None,
        }
    }

    /// Channels this set drives, paired with their target values
    pub fn values(&self) -> impl Iterator<Item = (Channel, f32)> + '_ {
        Channel::all().filter_map(move |c| self.value(c).map(|v| (c, v)))
    }

    /// Animation targets with each layer group's own timing
    pub fn targets(&self, motion: &MotionConfig) -> Vec<AnimationTarget<Channel>> {
        self.values()
            .map(|(channel, value)| {
                let timing = match channel.layer {
                    Layer::Track | Layer::Thumb => motion.offset_timing(),
                    Layer::HintSun | Layer::HintMoon => motion.hint_timing(),
                    _ => motion.icon_timing(),
                };
                AnimationTarget::new(channel, value, timing)
            })
            .collect()
    }

    /// Palette token selection for a layer in this state
    pub fn fill(&self, layer: Layer) -> (ColorScheme, ColorToken) {
        (self.scheme, layer.fill_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybreak_animation::Timing;

    #[test]
    fn test_light_params() {
        let p = derive_params(false, &ToggleGeometry::default());
        assert_eq!(p.scheme, ColorScheme::Light);
        assert_eq!(p.thumb_x, 0.0);
        assert_eq!(p.track_x, -126.0);
        assert_eq!(p.hint_sun, HINT_HIDDEN);
        assert_eq!(p.hint_moon, HINT_SHOWN);
        assert_eq!(p.sun_icon.opacity, 1.0);
        assert_eq!(p.moon_icon.rotate, 180.0);
    }

    #[test]
    fn test_dark_params() {
        let p = derive_params(true, &ToggleGeometry::default());
        assert_eq!(p.scheme, ColorScheme::Dark);
        assert_eq!(p.thumb_x, 80.0);
        assert_eq!(p.track_x, -46.0);
        assert_eq!(p.hint_sun, HINT_SHOWN);
        assert_eq!(p.sun_icon.rotate, -180.0);
        assert_eq!(p.sun_icon.scale, 0.3);
        assert_eq!(p.moon_icon.opacity, 1.0);
    }

    #[test]
    fn test_shimmer_and_press_are_not_theme_parameters() {
        let p = derive_params(true, &ToggleGeometry::default());
        assert_eq!(p.value(Channel::new(Layer::Shimmer, Property::X)), None);
        assert_eq!(p.value(Channel::new(Layer::Button, Property::Scale)), None);
        assert_eq!(p.values().count(), 12);
    }

    #[test]
    fn test_targets_use_group_timings() {
        let motion = MotionConfig::default();
        let targets = derive_params(true, &ToggleGeometry::default()).targets(&motion);

        let thumb = targets
            .iter()
            .find(|t| t.channel == Channel::new(Layer::Thumb, Property::X))
            .unwrap();
        assert_eq!(thumb.value, 80.0);
        assert!(matches!(thumb.timing, Timing::Spring(_)));

        let hint = targets
            .iter()
            .find(|t| t.channel.layer == Layer::HintMoon)
            .unwrap();
        assert_eq!(hint.timing, motion.hint_timing());
    }
}
