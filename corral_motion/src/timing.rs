// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::animation::{Animation, Status, sanitize_dt};
use crate::easing::Easing;

/// A fixed-duration scalar animation along an easing curve.
#[derive(Clone, Debug)]
pub struct Timing {
    from: f64,
    to: f64,
    duration: f64,
    easing: Easing,
    elapsed: f64,
    finished: bool,
}

impl Timing {
    /// Animates from `from` to `to` over `duration` seconds.
    ///
    /// A non-positive or non-finite `duration` jumps straight to `to` on the
    /// first tick.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            easing,
            elapsed: 0.0,
            finished: false,
        }
    }

    /// Value at `elapsed` seconds after the start.
    #[must_use]
    pub fn value_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        let progress = self.easing.apply(elapsed / self.duration);
        self.from + (self.to - self.from) * progress
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// End value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Seconds consumed so far, capped at the duration.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advances by `dt`, returning the unused part of `dt` once the end is reached.
    pub(crate) fn advance(&mut self, dt: f64) -> Option<f64> {
        if self.finished {
            return Some(dt);
        }
        let total = self.elapsed + dt;
        if total >= self.duration {
            self.elapsed = self.duration;
            self.finished = true;
            Some(total - self.duration)
        } else {
            self.elapsed = total;
            None
        }
    }

    /// Freezes the animation at its current value.
    pub fn stop(&mut self) {
        self.finished = true;
    }
}

impl Animation for Timing {
    type Value = f64;

    fn value(&self) -> f64 {
        if self.elapsed >= self.duration {
            self.to
        } else {
            self.value_at(self.elapsed)
        }
    }

    fn tick(&mut self, dt: f64) -> Status {
        match self.advance(sanitize_dt(dt)) {
            Some(_) => Status::Finished,
            None => Status::Running,
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_timing_interpolates() {
        let mut timing = Timing::new(0.0, 1.0, 0.5, Easing::Linear);
        assert_eq!(timing.tick(0.25), Status::Running);
        assert!((timing.value() - 0.5).abs() < 1e-12);
        assert_eq!(timing.tick(0.25), Status::Finished);
        assert_eq!(timing.value(), 1.0);
    }

    #[test]
    fn overshooting_tick_clamps_to_target() {
        let mut timing = Timing::new(20.0, -100.0, 0.3, Easing::EaseInOut);
        assert_eq!(timing.tick(1.0), Status::Finished);
        assert_eq!(timing.value(), -100.0);
        assert_eq!(timing.elapsed(), 0.3);
    }

    #[test]
    fn leftover_time_is_reported() {
        let mut timing = Timing::new(0.0, 1.0, 0.5, Easing::Linear);
        assert_eq!(timing.advance(0.4), None);
        let leftover = timing.advance(0.3).unwrap();
        assert!((leftover - 0.2).abs() < 1e-12);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut timing = Timing::new(3.0, 7.0, 0.0, Easing::EaseIn);
        assert_eq!(timing.value(), 7.0);
        assert_eq!(timing.tick(0.0), Status::Finished);
        assert_eq!(timing.value(), 7.0);
    }

    #[test]
    fn stop_freezes_midway() {
        let mut timing = Timing::new(0.0, 10.0, 1.0, Easing::Linear);
        timing.tick(0.5);
        timing.stop();
        assert!(timing.is_finished());
        assert_eq!(timing.tick(0.5), Status::Finished);
        assert!((timing.value() - 5.0).abs() < 1e-12);
    }
}
