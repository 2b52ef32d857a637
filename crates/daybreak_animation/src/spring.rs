//! Spring physics
//!
//! Damped harmonic oscillator integrated with RK4:
//!
//! ```text
//! a = (-stiffness * (x - target) - damping * v) / mass
//! ```
//!
//! Large frame deltas are split into fixed substeps so a stalled frame
//! cannot blow the integration up.

use serde::{Deserialize, Serialize};

/// Longest integration step, in seconds
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target below which the spring may come to rest
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f32,
    /// Speed below which the spring may come to rest
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f32,
}

fn default_rest_delta() -> f32 {
    0.005
}

fn default_rest_speed() -> f32 {
    0.01
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: default_rest_delta(),
            rest_speed: default_rest_speed(),
        }
    }

    /// Fast, no visible bounce
    pub fn stiff() -> Self {
        Self::new(700.0, 55.0, 1.0)
    }

    /// Quick with a hint of bounce, for press feedback
    pub fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Slow and soft
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; below 1.0 the spring overshoots
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0, 1.0)
    }
}

/// A single animated value driven by a spring
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    /// Create a spring resting at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            settled: true,
        }
    }

    /// Start with an initial velocity (used when taking over from another spring)
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self.settled = velocity == 0.0 && self.value == self.target;
        self
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Move the target; current velocity is kept
    pub fn set_target(&mut self, target: f32) {
        if self.target == target && self.settled {
            return;
        }
        self.target = target;
        self.settled = false;
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.settled || !(dt.is_finite() && dt > 0.0) {
            return;
        }

        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            self.rk4(h);
            if self.at_rest() {
                self.value = self.target;
                self.velocity = 0.0;
                self.settled = true;
                return;
            }
        }
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let c = &self.config;
        (-c.stiffness * (x - self.target) - c.damping * v) / c.mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);
        let k2x = v + k1v * h * 0.5;
        let k2v = self.acceleration(x + k1x * h * 0.5, v + k1v * h * 0.5);
        let k3x = v + k2v * h * 0.5;
        let k3v = self.acceleration(x + k2x * h * 0.5, v + k2v * h * 0.5);
        let k4x = v + k3v * h;
        let k4v = self.acceleration(x + k3x * h, v + k3v * h);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}
