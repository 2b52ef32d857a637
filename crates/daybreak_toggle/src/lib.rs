//! Daybreak Theme Toggle
//!
//! An animated light/dark switch: a sliding thumb carrying a sun and a moon
//! over a two-sided track, fixed hint icons, and a hover shimmer.
//!
//! The widget keeps one flag. Every flip re-derives a [`ParameterSet`],
//! hands the resulting targets to an [`Animator`](daybreak_animation::Animator)
//! and then reports the new scheme to a [`ThemeSink`](daybreak_theme::ThemeSink),
//! which owns the root styling marker.
//!
//! # Example
//!
//! ```rust
//! use daybreak_theme::RootClassList;
//! use daybreak_toggle::{Channel, Layer, Property, ThemeToggle};
//!
//! let mut toggle = ThemeToggle::new(RootClassList::new());
//! toggle.toggle();
//! assert!(toggle.sink().has_marker());
//!
//! for _ in 0..240 {
//!     toggle.tick(1.0 / 60.0);
//! }
//! let thumb = toggle.value(Channel::new(Layer::Thumb, Property::X));
//! assert_eq!(thumb, Some(80.0));
//! ```

pub mod config;
pub mod effect;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod layer;
pub mod motion;
pub mod params;
pub mod shimmer;
pub mod state;
pub mod toggle;
pub mod view;

pub use config::{LabelConfig, ThemeConfig, ToggleConfig};
pub use effect::RootEffect;
pub use error::ConfigError;
pub use geometry::ToggleGeometry;
pub use labels::{Labels, Locale};
pub use layer::{Channel, Layer, Property};
pub use motion::MotionConfig;
pub use params::{derive_params, HintPose, IconPose, ParameterSet};
pub use state::ToggleState;
pub use toggle::ThemeToggle;
pub use view::{LayerView, ToggleView};
