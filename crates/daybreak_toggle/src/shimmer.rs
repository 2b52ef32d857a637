//! Hover shimmer
//!
//! A soft highlight that sweeps across the track while the pointer is over
//! the control. It depends on hover alone, never on the theme mode.

use crate::geometry::ToggleGeometry;
use crate::layer::{Channel, Layer, Property};
use crate::motion::MotionConfig;
use daybreak_animation::AnimationTarget;

pub const SHIMMER_X: Channel = Channel::new(Layer::Shimmer, Property::X);
pub const SHIMMER_OPACITY: Channel = Channel::new(Layer::Shimmer, Property::Opacity);

/// Resting shimmer values, used when the toggle mounts
pub fn rest_values(geometry: &ToggleGeometry) -> [(Channel, f32); 2] {
    [(SHIMMER_X, geometry.shimmer_rest_x), (SHIMMER_OPACITY, 0.0)]
}

/// Shimmer targets for a hover state.
///
/// Hovered: the sweep loops between rest and the far end forever while the
/// highlight fades in. Not hovered: both return to rest.
pub fn targets(
    hovered: bool,
    geometry: &ToggleGeometry,
    motion: &MotionConfig,
) -> [AnimationTarget<Channel>; 2] {
    if hovered {
        [
            AnimationTarget::new(
                SHIMMER_X,
                geometry.shimmer_hover_x,
                motion.shimmer_sweep_timing(),
            ),
            AnimationTarget::new(SHIMMER_OPACITY, 1.0, motion.shimmer_fade_in_timing()),
        ]
    } else {
        [
            AnimationTarget::new(
                SHIMMER_X,
                geometry.shimmer_rest_x,
                motion.shimmer_rest_timing(),
            ),
            AnimationTarget::new(SHIMMER_OPACITY, 0.0, motion.shimmer_rest_timing()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_sweep_loops() {
        let [x, opacity] = targets(true, &ToggleGeometry::default(), &MotionConfig::default());
        assert_eq!(x.value, 160.0);
        assert!(x.timing.is_looping());
        assert_eq!(opacity.value, 1.0);
        assert!(!opacity.timing.is_looping());
    }

    #[test]
    fn test_rest_targets() {
        let [x, opacity] = targets(false, &ToggleGeometry::default(), &MotionConfig::default());
        assert_eq!(x.value, -100.0);
        assert_eq!(opacity.value, 0.0);
        assert!(!x.timing.is_looping());
    }
}
