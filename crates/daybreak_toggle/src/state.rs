//! Toggle, hover and press state machines
//!
//! Three disjoint machines: the theme mode, pointer hover (which drives the
//! shimmer), and pointer press (which drives press feedback and activation).
//! They only meet when targets and the view are produced.

use daybreak_core::events::event_types;
use daybreak_core::fsm::{EventId, StateMachine};
use daybreak_theme::ColorScheme;

/// Toggle mode states
pub mod modes {
    pub const LIGHT: u32 = 0;
    pub const DARK: u32 = 1;
}

/// Activation event for the mode machine
pub const TOGGLE: EventId = 100;

/// Hover states
pub mod hover {
    pub const REST: u32 = 0;
    pub const HOVERED: u32 = 1;
}

/// Press states
pub mod press {
    pub const RELEASED: u32 = 0;
    pub const PRESSED: u32 = 1;
}

/// The light/dark flag, starting at light
#[derive(Clone, Debug)]
pub struct ToggleState {
    fsm: StateMachine,
}

impl ToggleState {
    pub fn new() -> Self {
        let fsm = StateMachine::builder(modes::LIGHT)
            .on(modes::LIGHT, TOGGLE, modes::DARK)
            .on(modes::DARK, TOGGLE, modes::LIGHT)
            .build();
        Self { fsm }
    }

    pub fn is_dark(&self) -> bool {
        self.fsm.is_in(modes::DARK)
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.is_dark())
    }

    /// Flip the flag and return the new scheme
    pub fn toggle(&mut self) -> ColorScheme {
        self.fsm.send(TOGGLE);
        self.scheme()
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer hover over the control
#[derive(Clone, Debug)]
pub struct HoverState {
    fsm: StateMachine,
}

impl HoverState {
    pub fn new() -> Self {
        let fsm = StateMachine::builder(hover::REST)
            .on(hover::REST, event_types::POINTER_ENTER, hover::HOVERED)
            .on(hover::HOVERED, event_types::POINTER_LEAVE, hover::REST)
            .build();
        Self { fsm }
    }

    pub fn is_hovered(&self) -> bool {
        self.fsm.is_in(hover::HOVERED)
    }

    /// Feed a pointer event; returns whether the hover state changed
    pub fn send(&mut self, event: EventId) -> bool {
        let before = self.fsm.current_state();
        before != self.fsm.send(event)
    }
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of feeding a pointer event to the press machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Unchanged,
    Pressed,
    /// Released over the control: activate
    Activated,
    /// Pointer left while pressed: no activation
    Cancelled,
}

/// Pointer press on the control
#[derive(Clone, Debug)]
pub struct PressState {
    fsm: StateMachine,
}

impl PressState {
    pub fn new() -> Self {
        let fsm = StateMachine::builder(press::RELEASED)
            .on(press::RELEASED, event_types::POINTER_DOWN, press::PRESSED)
            .on(press::PRESSED, event_types::POINTER_UP, press::RELEASED)
            .on(press::PRESSED, event_types::POINTER_LEAVE, press::RELEASED)
            .build();
        Self { fsm }
    }

    pub fn is_pressed(&self) -> bool {
        self.fsm.is_in(press::PRESSED)
    }

    pub fn send(&mut self, event: EventId) -> PressOutcome {
        let before = self.fsm.current_state();
        let after = self.fsm.send(event);
        match (before, after) {
            (press::RELEASED, press::PRESSED) => PressOutcome::Pressed,
            (press::PRESSED, press::RELEASED) if event == event_types::POINTER_UP => {
                PressOutcome::Activated
            }
            (press::PRESSED, press::RELEASED) => PressOutcome::Cancelled,
            _ => PressOutcome::Unchanged,
        }
    }
}

impl Default for PressState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        let mut state = ToggleState::new();
        for n in 1..=7 {
            state.toggle();
            assert_eq!(state.is_dark(), n % 2 == 1);
        }
    }

    #[test]
    fn test_hover_ignores_repeated_enter() {
        let mut hover = HoverState::new();
        assert!(hover.send(event_types::POINTER_ENTER));
        assert!(!hover.send(event_types::POINTER_ENTER));
        assert!(hover.is_hovered());
        assert!(hover.send(event_types::POINTER_LEAVE));
        assert!(!hover.is_hovered());
    }

    #[test]
    fn test_press_release_activates() {
        let mut press = PressState::new();
        assert_eq!(press.send(event_types::POINTER_UP), PressOutcome::Unchanged);
        assert_eq!(press.send(event_types::POINTER_DOWN), PressOutcome::Pressed);
        assert_eq!(press.send(event_types::POINTER_UP), PressOutcome::Activated);
    }

    #[test]
    fn test_leave_cancels_press() {
        let mut press = PressState::new();
        press.send(event_types::POINTER_DOWN);
        assert_eq!(press.send(event_types::POINTER_LEAVE), PressOutcome::Cancelled);
        assert_eq!(press.send(event_types::POINTER_UP), PressOutcome::Unchanged);
    }
}
