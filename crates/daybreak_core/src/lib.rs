//! Daybreak Core
//!
//! Foundational primitives shared by the Daybreak crates:
//!
//! - **Colors**: RGBA values with hex parsing and formatting
//! - **State Machines**: flat statecharts driving widget states
//! - **Events**: the pointer/keyboard/lifecycle events a widget reacts to
//!
//! # Example
//!
//! ```rust
//! use daybreak_core::fsm::StateMachine;
//!
//! const LIGHT: u32 = 0;
//! const DARK: u32 = 1;
//! const TOGGLE: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(LIGHT)
//!     .on(LIGHT, TOGGLE, DARK)
//!     .on(DARK, TOGGLE, LIGHT)
//!     .build();
//!
//! assert_eq!(fsm.send(TOGGLE), DARK);
//! assert_eq!(fsm.send(TOGGLE), LIGHT);
//! ```

pub mod color;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use events::{event_types, Event, EventData, EventType, KeyCode};
pub use fsm::{EventId, StateId, StateMachine, Transition};
