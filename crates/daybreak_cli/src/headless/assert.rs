//! Assertion helpers for headless scenarios.
//!
//! Every assertion is evaluated against a fresh [`ToggleView`].

use daybreak_theme::ColorScheme;
use daybreak_toggle::{Channel, Layer, Property, ToggleView};

/// Assertion result with a human-readable failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { message: String },
}

impl AssertionResult {
    fn check(ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok {
            AssertionResult::Passed
        } else {
            AssertionResult::Failed { message: message() }
        }
    }
}

pub fn evaluate_assert_mode(expected: ColorScheme, view: &ToggleView) -> AssertionResult {
    AssertionResult::check(view.mode == expected, || {
        format!("expected mode {expected}, got {}", view.mode)
    })
}

pub fn evaluate_assert_marker(present: bool, marker_present: bool) -> AssertionResult {
    AssertionResult::check(marker_present == present, || {
        if present {
            "expected root marker to be present".to_string()
        } else {
            "expected root marker to be absent".to_string()
        }
    })
}

pub fn evaluate_assert_layer(
    layer: Layer,
    property: Property,
    expected: f32,
    tolerance: f32,
    view: &ToggleView,
) -> AssertionResult {
    let channel = Channel::new(layer, property);
    let Some(actual) = view.value(channel) else {
        return AssertionResult::Failed {
            message: format!("{channel}: not an animated channel"),
        };
    };
    AssertionResult::check((actual - expected).abs() <= tolerance, || {
        format!("{channel}: expected {expected} ± {tolerance}, got {actual}")
    })
}

pub fn evaluate_assert_settled(view: &ToggleView) -> AssertionResult {
    AssertionResult::check(!view.animating, || {
        "expected every layer to be at rest".to_string()
    })
}
