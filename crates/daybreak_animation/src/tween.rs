//! Fixed-duration tweens
//!
//! A tween interpolates `from -> to` over `duration_ms` with an easing
//! curve. Repeats restart the clock; mirrored repeats swap the endpoints on
//! every iteration so the value ping-pongs.

use crate::easing::Easing;
use crate::timing::Repeat;

#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    easing: Easing,
    repeat: Repeat,
    mirror: bool,
    /// Time into the current iteration
    elapsed_ms: f32,
    /// Completed iterations
    iterations: u32,
    /// Playing `to -> from` (mirrored repeats)
    reversed: bool,
    finished: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms as f32,
            easing,
            repeat: Repeat::Once,
            mirror: false,
            elapsed_ms: 0.0,
            iterations: 0,
            reversed: false,
            finished: duration_ms == 0,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Completed iterations so far
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Progress through the current iteration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        let (start, end) = if self.reversed {
            (self.to, self.from)
        } else {
            (self.from, self.to)
        };
        let progress = self.progress();
        if progress >= 1.0 {
            return end;
        }
        start + (end - start) * self.easing.apply(progress)
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if self.finished || !(dt_ms.is_finite() && dt_ms > 0.0) {
            return;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < self.duration_ms {
            return;
        }

        // `as` saturates, so a huge delta cannot overflow the counter
        let wraps = (self.elapsed_ms / self.duration_ms).floor() as u32;
        let completed = self.iterations.saturating_add(wraps);
        if !self.repeat.continues_after(completed) {
            self.iterations = self.repeat.limit().unwrap_or(completed);
            self.elapsed_ms = self.duration_ms;
            self.finished = true;
            return;
        }

        self.iterations = completed;
        self.elapsed_ms %= self.duration_ms;
        if self.mirror && wraps % 2 == 1 {
            self.reversed = !self.reversed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_shot_tween() {
        let mut tween = Tween::new(0.0, 1.0, 300, Easing::Linear);
        assert_eq!(tween.value(), 0.0);

        tween.tick(150.0);
        assert!((tween.value() - 0.5).abs() < 1e-5);

        tween.tick(200.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_mirrored_loop_ping_pongs() {
        let mut tween = Tween::new(-100.0, 160.0, 1500, Easing::Linear)
            .repeat(Repeat::Forever)
            .mirror(true);

        tween.tick(1500.0);
        assert!((tween.value() - 160.0).abs() < 1e-3);

        tween.tick(750.0);
        assert!((tween.value() - 30.0).abs() < 1e-3);

        tween.tick(750.0);
        assert!((tween.value() - -100.0).abs() < 1e-3);
        assert!(!tween.is_finished());
        assert_eq!(tween.iterations(), 2);
    }

    #[test]
    fn test_finite_repeats_finish() {
        let mut tween = Tween::new(0.0, 10.0, 100, Easing::Linear).repeat(Repeat::Times(3));
        tween.tick(250.0);
        assert!(!tween.is_finished());
        tween.tick(100.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_huge_delta_on_endless_loop_terminates() {
        let mut tween = Tween::new(-100.0, 160.0, 1500, Easing::EaseInOut)
            .repeat(Repeat::Forever)
            .mirror(true);
        tween.tick(1e12);
        assert!(!tween.is_finished());
        assert!((-100.0..=160.0).contains(&tween.value()));

        tween.tick(f32::MAX);
        assert!(tween.value().is_finite());
    }

    #[test]
    fn test_huge_delta_finishes_finite_repeats() {
        let mut tween = Tween::new(0.0, 10.0, 100, Easing::Linear).repeat(Repeat::Times(3));
        tween.tick(1e12);
        assert!(tween.is_finished());
        assert_eq!(tween.iterations(), 3);
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut tween = Tween::new(0.0, 10.0, 100, Easing::Linear);
        tween.tick(50.0);
        tween.tick(f32::NAN);
        tween.tick(f32::INFINITY);
        assert!((tween.value() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let tween = Tween::new(3.0, 7.0, 0, Easing::EaseOut);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 7.0);
    }
}
