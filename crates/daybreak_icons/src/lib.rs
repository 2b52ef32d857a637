//! # Daybreak Icons
//!
//! The Lucide sun and moon glyphs drawn by the theme toggle.
//!
//! Glyph bodies are generated at build time from `assets/lucide/*.svg`;
//! each constant holds the inner SVG markup on Lucide's 24x24 grid.
//!
//! ```rust
//! use daybreak_icons::{icons, to_svg};
//!
//! let svg = to_svg(icons::MOON, 20.0);
//! assert!(svg.starts_with("<svg"));
//! ```

#[rustfmt::skip]
pub mod icons {
    include!(concat!(env!("OUT_DIR"), "/icons.rs"));
}

/// Default Lucide viewBox (all icons are 24x24)
pub const VIEW_BOX: (f32, f32, f32, f32) = (0.0, 0.0, 24.0, 24.0);

/// Default stroke width for Lucide icons
pub const STROKE_WIDTH: f32 = 2.0;

/// Wrap glyph markup in a complete `<svg>` element stroked with `currentColor`
pub fn to_svg(path_data: &str, size: f32) -> String {
    to_svg_with_stroke(path_data, size, STROKE_WIDTH)
}

/// Like [`to_svg`] with a custom stroke width
pub fn to_svg_with_stroke(path_data: &str, size: f32, stroke_width: f32) -> String {
    let (min_x, min_y, width, height) = VIEW_BOX;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{min_x} {min_y} {width} {height}" fill="none" stroke="currentColor" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}

/// Look up a glyph by its Lucide name (`"sun"`, `"moon"`)
pub fn glyph(name: &str) -> Option<&'static str> {
    icons::ALL
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, body)| *body)
}
