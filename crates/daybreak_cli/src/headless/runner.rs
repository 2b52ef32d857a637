//! Scenario runner driving a toggle on a deterministic frame clock.

use crate::config::HeadlessConfig;
use crate::headless::assert::{
    evaluate_assert_layer, evaluate_assert_marker, evaluate_assert_mode, evaluate_assert_settled,
    AssertionResult,
};
use crate::headless::report::{RunProgress, ScenarioReport};
use crate::headless::scenario::{ScenarioStep, ToggleScenario};
use daybreak_animation::AnimationScheduler;
use daybreak_core::events::{event_types, Event, EventType, KeyCode};
use daybreak_theme::RootClassList;
use daybreak_toggle::{Channel, ThemeToggle};

/// The toggle as driven headlessly: an in-memory root and the stock scheduler
pub type HeadlessToggle = ThemeToggle<RootClassList, AnimationScheduler<Channel>>;

/// Temporal context passed into frame probes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeContext {
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub step_index: usize,
}

struct Clock {
    tick_ms: u64,
    probe_every: u32,
    elapsed_frames: u64,
    elapsed_ms: u64,
}

impl Clock {
    fn context(&self, step_index: usize) -> ProbeContext {
        ProbeContext {
            elapsed_frames: self.elapsed_frames,
            elapsed_ms: self.elapsed_ms,
            step_index,
        }
    }
}

/// Run a scenario without observing frames
pub fn run_scenario(
    scenario: &ToggleScenario,
    toggle: &mut HeadlessToggle,
    clock: HeadlessConfig,
) -> ScenarioReport {
    run_scenario_with_probe(
        scenario,
        toggle,
        clock,
        &mut |_: &ProbeContext, _: &HeadlessToggle| {},
    )
}

/// Run a scenario, calling `probe` every `probe_every_frames` frames and on
/// the last frame of every clock step.
pub fn run_scenario_with_probe<F>(
    scenario: &ToggleScenario,
    toggle: &mut HeadlessToggle,
    config: HeadlessConfig,
    probe: &mut F,
) -> ScenarioReport
where
    F: FnMut(&ProbeContext, &HeadlessToggle),
{
    let mut clock = Clock {
        tick_ms: config.tick_ms.max(1),
        probe_every: config.probe_every_frames.max(1),
        elapsed_frames: 0,
        elapsed_ms: 0,
    };

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::trace!(step_index, step = step.name(), "scenario step");

        if step.is_interaction() && !toggle.is_mounted() {
            return fail(step.name(), step_index, "toggle is unmounted".into(), toggle, &clock);
        }

        let result = match step {
            ScenarioStep::Toggle => {
                toggle.toggle();
                AssertionResult::Passed
            }
            ScenarioStep::HoverStart => pointer(toggle, event_types::POINTER_ENTER, &clock),
            ScenarioStep::HoverEnd => pointer(toggle, event_types::POINTER_LEAVE, &clock),
            ScenarioStep::Press => pointer(toggle, event_types::POINTER_DOWN, &clock),
            ScenarioStep::Release => pointer(toggle, event_types::POINTER_UP, &clock),
            ScenarioStep::Key { key } => {
                let code = KeyCode::from_name(key);
                if code == KeyCode::UNKNOWN {
                    AssertionResult::Failed {
                        message: format!("unknown key `{key}`"),
                    }
                } else {
                    toggle.handle_event(&Event::key_down(code).at(clock.elapsed_ms));
                    AssertionResult::Passed
                }
            }
            ScenarioStep::Tick { frames } => {
                let tick_ms = clock.tick_ms;
                run_frames(toggle, &mut clock, *frames, step_index, probe, |_| tick_ms);
                AssertionResult::Passed
            }
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, clock.tick_ms);
                let tick_ms = clock.tick_ms;
                let mut remaining_ms = *ms;
                run_frames(toggle, &mut clock, frames, step_index, probe, |_| {
                    let step_ms = remaining_ms.min(tick_ms);
                    remaining_ms -= step_ms;
                    step_ms
                });
                AssertionResult::Passed
            }
            ScenarioStep::Unmount => {
                toggle.handle_event(&Event::bare(event_types::UNMOUNT).at(clock.elapsed_ms));
                AssertionResult::Passed
            }
            ScenarioStep::AssertMode { mode } => evaluate_assert_mode(*mode, &toggle.view()),
            ScenarioStep::AssertMarker { present } => {
                evaluate_assert_marker(*present, toggle.sink().has_marker())
            }
            ScenarioStep::AssertLayer {
                layer,
                property,
                value,
                tolerance,
            } => evaluate_assert_layer(*layer, *property, *value, *tolerance, &toggle.view()),
            ScenarioStep::AssertSettled => evaluate_assert_settled(&toggle.view()),
        };

        if let AssertionResult::Failed { message } = result {
            return fail(step.name(), step_index, message, toggle, &clock);
        }
    }

    let progress = progress(scenario.steps.len(), toggle, &clock);
    ScenarioReport::passed(progress)
}

fn pointer(toggle: &mut HeadlessToggle, event_type: EventType, clock: &Clock) -> AssertionResult {
    let geometry = toggle.config().geometry;
    let event = Event::pointer(
        event_type,
        geometry.track_width / 2.0,
        geometry.track_height / 2.0,
    )
    .at(clock.elapsed_ms);
    toggle.handle_event(&event);
    AssertionResult::Passed
}

fn run_frames<F, A>(
    toggle: &mut HeadlessToggle,
    clock: &mut Clock,
    frames: u32,
    step_index: usize,
    probe: &mut F,
    mut advance_ms: A,
) where
    F: FnMut(&ProbeContext, &HeadlessToggle),
    A: FnMut(u32) -> u64,
{
    for frame in 1..=frames {
        let dt_ms = advance_ms(frame);
        toggle.tick(dt_ms as f32 / 1000.0);
        clock.elapsed_frames = clock.elapsed_frames.saturating_add(1);
        clock.elapsed_ms = clock.elapsed_ms.saturating_add(dt_ms);

        if frame % clock.probe_every == 0 || frame == frames {
            probe(&clock.context(step_index), toggle);
        }
    }
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    let tick = tick_ms.max(1);
    let frames = wait_ms.div_ceil(tick);
    frames.min(u32::MAX as u64) as u32
}

fn progress(steps_run: usize, toggle: &HeadlessToggle, clock: &Clock) -> RunProgress {
    RunProgress {
        steps_run,
        elapsed_frames: clock.elapsed_frames,
        elapsed_ms: clock.elapsed_ms,
        final_mode: toggle.scheme(),
        marker_present: toggle.sink().has_marker(),
    }
}

fn fail(
    assertion: &str,
    step_index: usize,
    message: String,
    toggle: &HeadlessToggle,
    clock: &Clock,
) -> ScenarioReport {
    tracing::debug!(step_index, assertion, %message, "scenario step failed");
    ScenarioReport::failed(assertion, step_index, message, progress(step_index, toggle, clock))
}
