//! Daybreak Theme System
//!
//! Color schemes, the palette tokens a theme toggle paints with, and the
//! root styling marker the rest of a page keys off.
//!
//! # Overview
//!
//! - **Schemes**: [`ColorScheme::Light`] and [`ColorScheme::Dark`]
//! - **Tokens**: one [`ColorToken`] per painted surface of the toggle and
//!   its page, resolved through a [`ThemeBundle`]
//! - **Presets**: Tailwind-style `zinc` and `neutral` bundles
//! - **Overrides**: per-scheme color overrides loaded from TOML
//! - **Root marker**: the [`ThemeSink`] trait receives every scheme change;
//!   [`RootClassList`] models a document root's class list
//!
//! # Quick Start
//!
//! ```rust
//! use daybreak_theme::{ColorScheme, ColorToken, RootClassList, ThemePreset, ThemeSink};
//!
//! let bundle = ThemePreset::Zinc.bundle();
//! let thumb = bundle.for_scheme(ColorScheme::Dark).get(ColorToken::Thumb);
//! assert_eq!(thumb.to_hex_string(), "#27272a");
//!
//! let mut root = RootClassList::new();
//! root.apply(true);
//! assert!(root.has_marker());
//! ```

pub mod bundle;
pub mod error;
pub mod overrides;
pub mod presets;
pub mod scheme;
pub mod sink;
pub mod tokens;

pub use bundle::ThemeBundle;
pub use error::ThemeError;
pub use overrides::PaletteOverrides;
pub use presets::ThemePreset;
pub use scheme::ColorScheme;
pub use sink::{RootClassList, ThemeSink, DARK_MARKER};
pub use tokens::*;
