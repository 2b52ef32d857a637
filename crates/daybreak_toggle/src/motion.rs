//! Transition timings for each layer group

use crate::error::{ConfigError, Result};
use daybreak_animation::{Easing, SpringConfig, Timing};
use serde::{Deserialize, Serialize};

/// How every group of channels moves.
///
/// Offsets ride a spring so the thumb overshoots and settles; icons and
/// hints use fixed-duration tweens on the standard curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub thumb_stiffness: f32,
    pub thumb_damping: f32,
    pub thumb_mass: f32,
    pub icon_duration_ms: u32,
    /// Cubic bezier control points `[x1, y1, x2, y2]`
    pub icon_easing: [f32; 4],
    pub hint_duration_ms: u32,
    pub hint_easing: [f32; 4],
    /// One sweep of the hover shimmer; the sweep then plays backwards
    pub shimmer_sweep_ms: u32,
    pub shimmer_fade_in_ms: u32,
    pub shimmer_rest_ms: u32,
    /// Button scale while pressed
    pub press_scale: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            thumb_stiffness: 100.0,
            thumb_damping: 14.0,
            thumb_mass: 1.0,
            icon_duration_ms: 800,
            icon_easing: [0.4, 0.0, 0.2, 1.0],
            hint_duration_ms: 1000,
            hint_easing: [0.4, 0.0, 0.2, 1.0],
            shimmer_sweep_ms: 1500,
            shimmer_fade_in_ms: 300,
            shimmer_rest_ms: 500,
            press_scale: 0.95,
        }
    }
}

impl MotionConfig {
    pub fn thumb_spring(&self) -> SpringConfig {
        SpringConfig::new(self.thumb_stiffness, self.thumb_damping, self.thumb_mass)
    }

    /// Track background and thumb offsets
    pub fn offset_timing(&self) -> Timing {
        Timing::spring(self.thumb_spring())
    }

    /// Foreground icon rotation, opacity and scale
    pub fn icon_timing(&self) -> Timing {
        Timing::tween(self.icon_duration_ms, bezier(self.icon_easing))
    }

    pub fn hint_timing(&self) -> Timing {
        Timing::tween(self.hint_duration_ms, bezier(self.hint_easing))
    }

    /// Endless back-and-forth sweep while hovered
    pub fn shimmer_sweep_timing(&self) -> Timing {
        Timing::mirrored_loop(self.shimmer_sweep_ms, Easing::EaseInOut)
    }

    pub fn shimmer_fade_in_timing(&self) -> Timing {
        Timing::tween(self.shimmer_fade_in_ms, Easing::EaseOut)
    }

    /// Return of the shimmer to its resting place
    pub fn shimmer_rest_timing(&self) -> Timing {
        Timing::tween(self.shimmer_rest_ms, Easing::EaseOut)
    }

    pub fn press_timing(&self) -> Timing {
        Timing::spring(SpringConfig::snappy())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.thumb_stiffness.is_finite() && self.thumb_stiffness > 0.0) {
            return Err(ConfigError::invalid("motion.thumb_stiffness", "must be positive"));
        }
        if !(self.thumb_mass.is_finite() && self.thumb_mass > 0.0) {
            return Err(ConfigError::invalid("motion.thumb_mass", "must be positive"));
        }
        if !(self.thumb_damping.is_finite() && self.thumb_damping >= 0.0) {
            return Err(ConfigError::invalid("motion.thumb_damping", "must not be negative"));
        }

        let durations = [
            ("motion.icon_duration_ms", self.icon_duration_ms),
            ("motion.hint_duration_ms", self.hint_duration_ms),
            ("motion.shimmer_sweep_ms", self.shimmer_sweep_ms),
            ("motion.shimmer_fade_in_ms", self.shimmer_fade_in_ms),
            ("motion.shimmer_rest_ms", self.shimmer_rest_ms),
        ];
        for (field, ms) in durations {
            if ms == 0 {
                return Err(ConfigError::invalid(field, "must be greater than zero"));
            }
        }

        for (field, [x1, _, x2, _]) in [
            ("motion.icon_easing", self.icon_easing),
            ("motion.hint_easing", self.hint_easing),
        ] {
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ConfigError::invalid(field, "x control points must lie in [0, 1]"));
            }
        }

        if !(self.press_scale > 0.0 && self.press_scale <= 1.0) {
            return Err(ConfigError::invalid("motion.press_scale", "must be in (0, 1]"));
        }
        Ok(())
    }
}

fn bezier([x1, y1, x2, y2]: [f32; 4]) -> Easing {
    Easing::CubicBezier(x1, y1, x2, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thumb_spring_overshoots() {
        let motion = MotionConfig::default();
        assert!(motion.thumb_spring().is_underdamped());
        assert!(motion.validate().is_ok());
    }

    #[test]
    fn test_icon_timing_uses_standard_curve() {
        assert_eq!(
            MotionConfig::default().icon_timing(),
            Timing::tween(800, Easing::STANDARD)
        );
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let motion = MotionConfig {
            hint_duration_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            motion.validate(),
            Err(ConfigError::Invalid { field: "motion.hint_duration_ms", .. })
        ));
    }

    #[test]
    fn test_zero_stiffness_is_rejected() {
        let motion = MotionConfig {
            thumb_stiffness: 0.0,
            ..Default::default()
        };
        assert!(motion.validate().is_err());
    }
}
