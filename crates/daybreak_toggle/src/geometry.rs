//! Toggle geometry in pixels

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Fixed layout of the toggle.
///
/// The track background is a `background_width` wide graphic whose left half
/// is light and right half is dark, split at `boundary_x`. It is shifted so
/// the split always sits under the thumb center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleGeometry {
    pub track_width: f32,
    pub track_height: f32,
    /// Thumb diameter
    pub thumb_size: f32,
    /// Gap between thumb and track edge
    pub thumb_margin: f32,
    /// Light/dark split of the background graphic
    pub boundary_x: f32,
    pub background_width: f32,
    /// Shimmer offset while not hovered
    pub shimmer_rest_x: f32,
    /// Far end of the hover shimmer sweep
    pub shimmer_hover_x: f32,
}

impl Default for ToggleGeometry {
    fn default() -> Self {
        Self {
            track_width: 128.0,
            track_height: 48.0,
            thumb_size: 40.0,
            thumb_margin: 4.0,
            boundary_x: 150.0,
            background_width: 300.0,
            shimmer_rest_x: -100.0,
            shimmer_hover_x: 160.0,
        }
    }
}

impl ToggleGeometry {
    /// Distance the thumb slides between the two states
    pub fn thumb_travel(&self) -> f32 {
        self.track_width - self.thumb_size - 2.0 * self.thumb_margin
    }

    /// Thumb offset from its leftmost position
    pub fn thumb_offset(&self, is_dark: bool) -> f32 {
        if is_dark {
            self.thumb_travel()
        } else {
            0.0
        }
    }

    /// Thumb center measured from the track's left edge
    pub fn thumb_center(&self, is_dark: bool) -> f32 {
        self.thumb_margin + self.thumb_size / 2.0 + self.thumb_offset(is_dark)
    }

    /// Background offset that puts the light/dark split under the thumb
    pub fn track_offset(&self, is_dark: bool) -> f32 {
        self.thumb_center(is_dark) - self.boundary_x
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("geometry.track_width", self.track_width),
            ("geometry.track_height", self.track_height),
            ("geometry.thumb_size", self.thumb_size),
            ("geometry.background_width", self.background_width),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
            }
        }
        if !(self.thumb_margin.is_finite() && self.thumb_margin >= 0.0) {
            return Err(ConfigError::invalid(
                "geometry.thumb_margin",
                format!("must not be negative, got {}", self.thumb_margin),
            ));
        }
        if self.thumb_size + 2.0 * self.thumb_margin > self.track_height {
            return Err(ConfigError::invalid(
                "geometry.thumb_size",
                "thumb and margins exceed the track height",
            ));
        }
        if self.thumb_travel() <= 0.0 {
            return Err(ConfigError::invalid(
                "geometry.thumb_size",
                "thumb and margins leave no room to slide",
            ));
        }
        if !(self.boundary_x > 0.0 && self.boundary_x < self.background_width) {
            return Err(ConfigError::invalid(
                "geometry.boundary_x",
                "must fall inside the background graphic",
            ));
        }
        if !(self.shimmer_rest_x.is_finite() && self.shimmer_hover_x.is_finite()) {
            return Err(ConfigError::invalid(
                "geometry.shimmer_hover_x",
                "shimmer offsets must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offsets() {
        let g = ToggleGeometry::default();
        assert_eq!(g.thumb_travel(), 80.0);
        assert_eq!(g.thumb_center(false), 24.0);
        assert_eq!(g.thumb_center(true), 104.0);
        assert_eq!(g.track_offset(false), -126.0);
        assert_eq!(g.track_offset(true), -46.0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_oversized_thumb_is_rejected() {
        let g = ToggleGeometry {
            thumb_size: 44.0,
            ..Default::default()
        };
        assert!(matches!(
            g.validate(),
            Err(ConfigError::Invalid { field: "geometry.thumb_size", .. })
        ));
    }

    #[test]
    fn test_negative_width_is_rejected() {
        let g = ToggleGeometry {
            track_width: -1.0,
            ..Default::default()
        };
        assert!(g.validate().is_err());
    }
}
