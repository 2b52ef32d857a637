//! Per-channel timing configuration

use crate::easing::Easing;
use crate::spring::SpringConfig;
use serde::{Deserialize, Serialize};

/// How many times a tween plays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Play once and hold the final value
    #[default]
    Once,
    /// Play this many times in total
    Times(u32),
    /// Never finish
    Forever,
}

impl Repeat {
    /// Total iterations played, `None` for endless repeats
    pub fn limit(&self) -> Option<u32> {
        match *self {
            Repeat::Once => Some(1),
            Repeat::Times(total) => Some(total.max(1)),
            Repeat::Forever => None,
        }
    }

    /// Whether another iteration follows the `completed`-th one
    pub fn continues_after(&self, completed: u32) -> bool {
        self.limit().map_or(true, |limit| completed < limit)
    }
}

/// Timing for one animated channel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Timing {
    /// Spring physics; velocity carries over when retargeted
    Spring(SpringConfig),
    /// Fixed-duration tween
    Tween {
        duration_ms: u32,
        #[serde(default)]
        easing: Easing,
        #[serde(default)]
        repeat: Repeat,
        /// Alternate direction on every repeat
        #[serde(default)]
        mirror: bool,
    },
    /// Jump straight to the target
    Instant,
}

impl Timing {
    /// Single-shot tween
    pub fn tween(duration_ms: u32, easing: Easing) -> Self {
        Timing::Tween {
            duration_ms,
            easing,
            repeat: Repeat::Once,
            mirror: false,
        }
    }

    /// Tween that ping-pongs between start and target forever
    pub fn mirrored_loop(duration_ms: u32, easing: Easing) -> Self {
        Timing::Tween {
            duration_ms,
            easing,
            repeat: Repeat::Forever,
            mirror: true,
        }
    }

    pub fn spring(config: SpringConfig) -> Self {
        Timing::Spring(config)
    }

    pub fn is_looping(&self) -> bool {
        matches!(
            self,
            Timing::Tween {
                repeat: Repeat::Forever,
                ..
            }
        )
    }
}
