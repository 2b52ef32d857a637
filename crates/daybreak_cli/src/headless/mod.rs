//! Headless toggle runs
//!
//! A scenario is a JSON list of steps executed against one mounted toggle
//! on a fixed frame clock, so every run is reproducible.

pub mod assert;
pub mod report;
pub mod runner;
pub mod scenario;

pub use report::ScenarioReport;
pub use runner::{run_scenario, run_scenario_with_probe, HeadlessToggle, ProbeContext};
pub use scenario::{ScenarioStep, ToggleScenario};
