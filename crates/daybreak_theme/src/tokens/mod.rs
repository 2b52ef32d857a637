//! Design tokens for theming
//!
//! Colors are the only tokens a theme toggle swaps; geometry and motion live
//! with the widget.

mod color;

pub use color::*;
