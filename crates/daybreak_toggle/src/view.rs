//! Serializable snapshot of a rendered toggle

use crate::layer::{Channel, Layer, Property};
use daybreak_theme::ColorScheme;
use serde::Serialize;
use std::collections::BTreeMap;

/// Current animated values and fill of one layer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerView {
    pub layer: Layer,
    /// Resolved fill color as `#rrggbb[aa]`
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl LayerView {
    pub(crate) fn new(layer: Layer, fill: String) -> Self {
        Self {
            layer,
            fill,
            x: None,
            opacity: None,
            rotate: None,
            scale: None,
        }
    }

    pub fn get(&self, property: Property) -> Option<f32> {
        match property {
            Property::X => self.x,
            Property::Opacity => self.opacity,
            Property::Rotate => self.rotate,
            Property::Scale => self.scale,
        }
    }

    pub(crate) fn set(&mut self, property: Property, value: f32) {
        let slot = match property {
            Property::X => &mut self.x,
            Property::Opacity => &mut self.opacity,
            Property::Rotate => &mut self.rotate,
            Property::Scale => &mut self.scale,
        };
        *slot = Some(value);
    }
}

/// Everything a renderer (or a test) needs to draw the toggle for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToggleView {
    pub mode: ColorScheme,
    pub heading: &'static str,
    pub aria_label: &'static str,
    pub caption: &'static str,
    /// Whether the root styling marker is currently applied
    pub marker_present: bool,
    pub hovered: bool,
    pub pressed: bool,
    pub animating: bool,
    /// Layers back to front
    pub layers: Vec<LayerView>,
    /// Every palette token of the active scheme
    pub colors: BTreeMap<&'static str, String>,
    pub sun_svg: String,
    pub moon_svg: String,
}

impl ToggleView {
    pub fn layer(&self, layer: Layer) -> Option<&LayerView> {
        self.layers.iter().find(|l| l.layer == layer)
    }

    pub fn value(&self, channel: Channel) -> Option<f32> {
        self.layer(channel.layer)
            .and_then(|l| l.get(channel.property))
    }
}
