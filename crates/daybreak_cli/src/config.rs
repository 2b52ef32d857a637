//! Daybreak configuration file handling

use anyhow::{bail, Context, Result};
use daybreak_theme::{PaletteOverrides, ThemeBundle};
use daybreak_toggle::{LabelConfig, MotionConfig, ThemeConfig, ToggleConfig, ToggleGeometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "daybreak.toml";

/// Top-level Daybreak configuration (daybreak.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DaybreakConfig {
    #[serde(default)]
    pub geometry: ToggleGeometry,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// Deterministic frame clock for headless runs
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct HeadlessConfig {
    /// Logical milliseconds between frames
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Probe sampling interval in frames (1 = every frame)
    #[serde(default = "default_probe_every")]
    pub probe_every_frames: u32,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_probe_every() -> u32 {
    4
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            probe_every_frames: default_probe_every(),
        }
    }
}

/// A loaded configuration and the directory relative paths resolve against
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: DaybreakConfig,
    pub base_dir: PathBuf,
}

impl DaybreakConfig {
    /// Load configuration from a file or a directory containing daybreak.toml.
    ///
    /// An existing directory without a config file yields the defaults. A
    /// path that does not exist is an error.
    pub fn load(path: &Path) -> Result<LoadedConfig> {
        let (config_path, base_dir) = if path.is_file() {
            let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (path.to_path_buf(), base)
        } else if path.is_dir() {
            (path.join(CONFIG_FILE), path.to_path_buf())
        } else {
            bail!(
                "No config found at {}. Run `daybreak init` to create one.",
                path.display()
            );
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(LoadedConfig {
                config: DaybreakConfig::default(),
                base_dir,
            });
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", config_path.display()))?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(LoadedConfig { config, base_dir })
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DaybreakConfig = toml::from_str(content).context("Failed to parse TOML")?;
        config.toggle_config().validate()?;
        if config.headless.tick_ms == 0 {
            bail!("invalid `headless.tick_ms`: must be greater than zero");
        }
        if config.headless.probe_every_frames == 0 {
            bail!("invalid `headless.probe_every_frames`: must be greater than zero");
        }
        Ok(config)
    }

    /// The widget-facing part of the configuration
    pub fn toggle_config(&self) -> ToggleConfig {
        ToggleConfig {
            geometry: self.geometry,
            motion: self.motion,
            theme: self.theme.clone(),
            labels: self.labels,
        }
    }

    /// Preset bundle with the palette overrides file applied, if configured
    pub fn bundle(&self, base_dir: &Path) -> Result<ThemeBundle> {
        let bundle = self.toggle_config().bundle()?;
        let Some(palette) = &self.theme.palette else {
            return Ok(bundle);
        };

        let path = base_dir.join(palette);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read palette {}", path.display()))?;
        let overrides = PaletteOverrides::from_toml(&content)
            .with_context(|| format!("Invalid palette {}", path.display()))?;
        Ok(bundle.with_overrides(&overrides))
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybreak_toggle::Locale;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let text = DaybreakConfig::default().to_toml().unwrap();
        let parsed = DaybreakConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.toggle_config(), ToggleConfig::default());
        assert_eq!(parsed.headless.tick_ms, 16);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = DaybreakConfig::from_toml("[labels]\nlocale = \"en\"\n").unwrap();
        assert_eq!(config.labels.locale, Locale::En);
        assert_eq!(config.headless.probe_every_frames, 4);
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        assert!(DaybreakConfig::from_toml("[headless]\ntick_ms = 0\n").is_err());
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let err = DaybreakConfig::from_toml("[geometry]\nthumb_size = 100.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("geometry.thumb_size"));
    }

    #[test]
    fn test_directory_without_config_uses_defaults() {
        let dir = std::env::temp_dir().join(format!("daybreak-empty-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let loaded = DaybreakConfig::load(&dir).unwrap();
        assert_eq!(loaded.config.toggle_config(), ToggleConfig::default());
        assert_eq!(loaded.base_dir, dir);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_config_path_is_rejected() {
        let err = DaybreakConfig::load(Path::new("misspelled.toml")).unwrap_err();
        assert!(format!("{err}").contains("daybreak init"));
        assert!(DaybreakConfig::load(Path::new("definitely/not/here")).is_err());
    }
}
