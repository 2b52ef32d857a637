//! Daybreak Animation System
//!
//! Spring physics, eased tweens, and a scheduler that drives independent
//! animation channels.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: duration + easing curve, with finite or infinite repeats
//! - **Per-channel timing**: every channel carries its own [`Timing`], so
//!   layers settle independently instead of sharing one clock
//! - **Interruptible**: springs keep their velocity when retargeted
//!
//! Widgets talk to the engine only through the [`Animator`] trait;
//! [`AnimationScheduler`] is the stock implementation.

pub mod animator;
pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod timing;
pub mod tween;

pub use animator::{AnimationTarget, Animator};
pub use easing::Easing;
pub use scheduler::AnimationScheduler;
pub use spring::{Spring, SpringConfig};
pub use timing::{Repeat, Timing};
pub use tween::Tween;
