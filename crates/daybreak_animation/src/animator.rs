//! The boundary between widgets and the motion engine
//!
//! Widgets describe *where* each channel should end up and *how* it should
//! get there ([`AnimationTarget`]); an [`Animator`] produces the in-between
//! frames. Widgets are generic over the animator, so a headless test can use
//! the stock scheduler while a renderer plugs in its own engine.

use crate::timing::Timing;

/// Desired end state for one animated channel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTarget<K> {
    pub channel: K,
    pub value: f32,
    pub timing: Timing,
}

impl<K> AnimationTarget<K> {
    pub fn new(channel: K, value: f32, timing: Timing) -> Self {
        Self {
            channel,
            value,
            timing,
        }
    }
}

/// Interpolates animation channels keyed by `K`
pub trait Animator<K> {
    /// Drive a channel toward its target with the target's timing.
    ///
    /// An unknown channel starts at the target value.
    fn animate(&mut self, target: AnimationTarget<K>);

    /// Place a channel at `value` immediately, cancelling any motion
    fn snap(&mut self, channel: K, value: f32);

    /// Current value of a channel
    fn value(&self, channel: K) -> Option<f32>;

    /// Advance every channel by `dt` seconds
    fn advance(&mut self, dt: f32);

    /// Whether any channel is still moving (looping channels count)
    fn is_animating(&self) -> bool;

    /// Issue a batch of targets
    fn animate_all<I>(&mut self, targets: I)
    where
        I: IntoIterator<Item = AnimationTarget<K>>,
        Self: Sized,
    {
        for target in targets {
            self.animate(target);
        }
    }
}
