//! State Machine Runtime
//!
//! Flat state machines for widget interaction states. A widget with several
//! independent concerns (theme mode, hover, press) owns one machine per
//! concern and combines their states only when rendering.

use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: SmallVec<[Transition; 4]>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: SmallVec::new(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
        }
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine {
    current_state: StateId,
    transitions: SmallVec<[Transition; 4]>,
}

impl StateMachine {
    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;
        let Some(to_state) = self.find(event) else {
            return current;
        };

        self.current_state = to_state;
        tracing::trace!(from = current, event, to = to_state, "fsm transition");

        to_state
    }

    fn find(&self, event: EventId) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|t| t.from_state == self.current_state && t.event == event)
            .map(|t| t.to_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: StateId = 0;
    const HOVERED: StateId = 1;
    const PRESSED: StateId = 2;

    const POINTER_ENTER: EventId = 1;
    const POINTER_LEAVE: EventId = 2;
    const POINTER_DOWN: EventId = 3;
    const POINTER_UP: EventId = 4;

    fn pointer_machine() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, POINTER_ENTER, HOVERED)
            .on(HOVERED, POINTER_LEAVE, IDLE)
            .on(HOVERED, POINTER_DOWN, PRESSED)
            .transition(Transition::new(PRESSED, POINTER_UP, HOVERED))
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = pointer_machine();
        assert_eq!(fsm.current_state(), IDLE);

        fsm.send(POINTER_ENTER);
        assert_eq!(fsm.current_state(), HOVERED);

        fsm.send(POINTER_DOWN);
        assert!(fsm.is_in(PRESSED));

        fsm.send(POINTER_UP);
        assert_eq!(fsm.current_state(), HOVERED);

        fsm.send(POINTER_LEAVE);
        assert_eq!(fsm.current_state(), IDLE);
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = pointer_machine();

        // POINTER_DOWN is not valid in IDLE state
        assert_eq!(fsm.send(POINTER_DOWN), IDLE);
        assert!(fsm.is_in(IDLE));
    }

    #[test]
    fn test_release_outside_press_is_ignored() {
        let mut fsm = pointer_machine();
        fsm.send(POINTER_ENTER);
        assert_eq!(fsm.send(POINTER_UP), HOVERED);
    }
}
