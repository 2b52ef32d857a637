//! UI events
//!
//! The small set of events a Daybreak widget reacts to: pointer hover and
//! press, key presses, and mount lifecycle.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const KEY_DOWN: EventType = 20;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Host timestamp in milliseconds
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer { x: f32, y: f32 },
    Key { key: KeyCode, repeat: bool },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Map a key name (`"Enter"`, `"Space"`, `" "`, ...) to a key code
    pub fn from_name(name: &str) -> KeyCode {
        match name.to_ascii_lowercase().as_str() {
            "tab" => KeyCode::TAB,
            "enter" | "return" => KeyCode::ENTER,
            "escape" | "esc" => KeyCode::ESCAPE,
            "space" | " " => KeyCode::SPACE,
            _ => KeyCode::UNKNOWN,
        }
    }

    /// Keys that activate a focused button
    pub fn is_activation(&self) -> bool {
        *self == KeyCode::ENTER || *self == KeyCode::SPACE
    }
}

impl Event {
    /// Pointer event at the given local position
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y },
            timestamp: 0,
        }
    }

    /// Key-down event
    pub fn key_down(key: KeyCode) -> Self {
        Self {
            event_type: event_types::KEY_DOWN,
            data: EventData::Key { key, repeat: false },
            timestamp: 0,
        }
    }

    /// Event without payload (lifecycle events)
    pub fn bare(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
            timestamp: 0,
        }
    }

    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The key carried by a key event
    pub fn key(&self) -> Option<KeyCode> {
        match self.data {
            EventData::Key { key, .. } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::from_name("Enter"), KeyCode::ENTER);
        assert_eq!(KeyCode::from_name(" "), KeyCode::SPACE);
        assert_eq!(KeyCode::from_name("F13"), KeyCode::UNKNOWN);
        assert!(KeyCode::SPACE.is_activation());
        assert!(!KeyCode::TAB.is_activation());
    }

    #[test]
    fn test_key_payload() {
        let event = Event::key_down(KeyCode::ENTER).at(42);
        assert_eq!(event.event_type, event_types::KEY_DOWN);
        assert_eq!(event.key(), Some(KeyCode::ENTER));
        assert_eq!(event.timestamp, 42);
        assert_eq!(Event::pointer(event_types::POINTER_DOWN, 1.0, 2.0).key(), None);
    }
}
