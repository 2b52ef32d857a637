//! Animation scheduler
//!
//! Owns one channel per animated (layer, property) pair and advances all of
//! them each frame. Every channel keeps its own timing, so a spring-driven
//! offset and an eased fade started on the same frame settle independently.

use crate::animator::{AnimationTarget, Animator};
use crate::spring::Spring;
use crate::timing::Timing;
use crate::tween::Tween;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::fmt::Debug;
use std::hash::Hash;

new_key_type! {
    pub struct ChannelId;
}

/// What currently moves a channel
#[derive(Clone, Debug)]
enum Motion {
    Idle,
    Spring(Spring),
    Tween(Tween),
}

#[derive(Clone, Debug)]
struct Channel {
    value: f32,
    motion: Motion,
}

impl Channel {
    fn resting(value: f32) -> Self {
        Self {
            value,
            motion: Motion::Idle,
        }
    }

    fn is_moving(&self) -> bool {
        !matches!(self.motion, Motion::Idle)
    }

    fn velocity(&self) -> f32 {
        match &self.motion {
            Motion::Spring(spring) => spring.velocity(),
            _ => 0.0,
        }
    }

    fn retarget(&mut self, value: f32, timing: Timing) {
        match timing {
            Timing::Instant => {
                self.value = value;
                self.motion = Motion::Idle;
            }
            Timing::Spring(config) => {
                if let Motion::Spring(spring) = &mut self.motion {
                    if *spring.config() == config {
                        spring.set_target(value);
                        return;
                    }
                }
                if !self.is_moving() && self.value == value {
                    return;
                }
                let mut spring = Spring::new(config, self.value).with_velocity(self.velocity());
                spring.set_target(value);
                self.motion = Motion::Spring(spring);
            }
            Timing::Tween {
                duration_ms,
                easing,
                repeat,
                mirror,
            } => {
                if !self.is_moving() && self.value == value {
                    return;
                }
                let tween = Tween::new(self.value, value, duration_ms, easing)
                    .repeat(repeat)
                    .mirror(mirror);
                self.value = tween.value();
                self.motion = if tween.is_finished() {
                    Motion::Idle
                } else {
                    Motion::Tween(tween)
                };
            }
        }
    }

    fn step(&mut self, dt: f32) {
        let done = match &mut self.motion {
            Motion::Idle => return,
            Motion::Spring(spring) => {
                spring.step(dt);
                self.value = spring.value();
                spring.is_settled()
            }
            Motion::Tween(tween) => {
                tween.tick(dt * 1000.0);
                self.value = tween.value();
                tween.is_finished()
            }
        };
        if done {
            self.motion = Motion::Idle;
        }
    }
}

/// The animation scheduler that ticks all active channels
pub struct AnimationScheduler<K> {
    channels: SlotMap<ChannelId, Channel>,
    index: FxHashMap<K, ChannelId>,
}

impl<K> AnimationScheduler<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            channels: SlotMap::with_key(),
            index: FxHashMap::default(),
        }
    }

    /// Number of channels ever addressed
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Whether this particular channel is in motion
    pub fn is_channel_moving(&self, channel: K) -> bool {
        self.channel(channel).is_some_and(Channel::is_moving)
    }

    fn channel(&self, key: K) -> Option<&Channel> {
        self.index.get(&key).and_then(|id| self.channels.get(*id))
    }

    fn channel_mut_or_insert(&mut self, key: K, initial: f32) -> (&mut Channel, bool) {
        if let Some(id) = self.index.get(&key).copied() {
            if self.channels.contains_key(id) {
                return (&mut self.channels[id], false);
            }
        }
        let id = self.channels.insert(Channel::resting(initial));
        self.index.insert(key, id);
        (&mut self.channels[id], true)
    }
}

impl<K> Default for AnimationScheduler<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Animator<K> for AnimationScheduler<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn animate(&mut self, target: AnimationTarget<K>) {
        let (channel, created) = self.channel_mut_or_insert(target.channel, target.value);
        if created {
            return;
        }
        tracing::trace!(channel = ?target.channel, from = channel.value, to = target.value, "retarget");
        channel.retarget(target.value, target.timing);
    }

    fn snap(&mut self, channel: K, value: f32) {
        let (channel, _) = self.channel_mut_or_insert(channel, value);
        channel.value = value;
        channel.motion = Motion::Idle;
    }

    fn value(&self, channel: K) -> Option<f32> {
        self.channel(channel).map(|c| c.value)
    }

    fn advance(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        for (_, channel) in self.channels.iter_mut() {
            channel.step(dt);
        }
    }

    fn is_animating(&self) -> bool {
        self.channels.iter().any(|(_, c)| c.is_moving())
    }
}
