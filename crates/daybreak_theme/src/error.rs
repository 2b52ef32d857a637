//! Theme error types

use thiserror::Error;

/// Errors raised while loading palettes
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Override file is not valid TOML for the expected shape
    #[error("invalid palette overrides: {0}")]
    Parse(#[from] toml::de::Error),

    /// Override names a token that does not exist
    #[error("unknown color token '{0}'")]
    UnknownToken(String),

    /// Override value is not a hex color
    #[error("invalid color '{value}' for token '{token}'")]
    InvalidColor { token: String, value: String },

    /// Preset name not in the catalog
    #[error("unknown theme preset '{0}'")]
    UnknownPreset(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
