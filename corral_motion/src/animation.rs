// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether an animation still needs ticks after the most recent advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The animation has not reached its end value yet.
    Running,
    /// The animation reached its end value (or was stopped) and will not move again.
    Finished,
}

impl Status {
    /// Returns `true` for [`Status::Finished`].
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// A value that changes over time when driven by explicit ticks.
///
/// Time is always supplied by the caller in seconds. Implementations never read
/// a clock; the host feeds display-refresh intervals or a fixed step.
pub trait Animation {
    /// The animated value.
    type Value: Copy;

    /// Current value, as of the last tick.
    fn value(&self) -> Self::Value;

    /// Advances the animation by `dt` seconds.
    ///
    /// Negative or non-finite `dt` is treated as zero. Ticking a finished
    /// animation is a no-op that returns [`Status::Finished`].
    fn tick(&mut self, dt: f64) -> Status;

    /// Returns `true` once the animation has settled or been stopped.
    fn is_finished(&self) -> bool;
}

/// Normalizes a host-supplied tick interval.
pub(crate) fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
