//! Scenario definition for headless toggle runs.

use anyhow::{Context, Result};
use daybreak_theme::ColorScheme;
use daybreak_toggle::{Layer, Property};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sequence of headless steps run against one mounted toggle.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToggleScenario {
    pub steps: Vec<ScenarioStep>,
}

impl ToggleScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse scenario")
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw)
    }
}

fn default_tolerance() -> f32 {
    1e-3
}

/// One scenario step: an interaction, a clock advance, or an assertion.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Toggle,
    HoverStart,
    HoverEnd,
    /// Pointer down over the control
    Press,
    /// Pointer up over the control
    Release,
    /// Key press by name (`"Enter"`, `"Space"`, ...)
    Key { key: String },
    Tick { frames: u32 },
    Wait { ms: u64 },
    Unmount,
    AssertMode { mode: ColorScheme },
    AssertMarker { present: bool },
    AssertLayer {
        layer: Layer,
        property: Property,
        value: f32,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    /// Every layer has stopped moving
    AssertSettled,
}

impl ScenarioStep {
    /// Step name as written in scenario files
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::Toggle => "toggle",
            ScenarioStep::HoverStart => "hover_start",
            ScenarioStep::HoverEnd => "hover_end",
            ScenarioStep::Press => "press",
            ScenarioStep::Release => "release",
            ScenarioStep::Key { .. } => "key",
            ScenarioStep::Tick { .. } => "tick",
            ScenarioStep::Wait { .. } => "wait",
            ScenarioStep::Unmount => "unmount",
            ScenarioStep::AssertMode { .. } => "assert_mode",
            ScenarioStep::AssertMarker { .. } => "assert_marker",
            ScenarioStep::AssertLayer { .. } => "assert_layer",
            ScenarioStep::AssertSettled => "assert_settled",
        }
    }

    /// Steps that interact with the toggle and need it mounted
    pub fn is_interaction(&self) -> bool {
        matches!(
            self,
            ScenarioStep::Toggle
                | ScenarioStep::HoverStart
                | ScenarioStep::HoverEnd
                | ScenarioStep::Press
                | ScenarioStep::Release
                | ScenarioStep::Key { .. }
        )
    }
}
