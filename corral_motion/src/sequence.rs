// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered animation steps over one scalar value.
//!
//! Each step starts from wherever the previous one left the value, so a
//! sequence only needs end values, not start values. Time left over when a
//! step finishes mid-tick carries into the next step, which keeps long
//! sequences on schedule regardless of tick size.
//!
//! ## Minimal example
//!
//! ```
//! use corral_motion::{Animation, Sequence, Status, Step};
//!
//! // Slide a banner in, hold it, slide it back out.
//! let mut banner = Sequence::new(
//!     -100.0,
//!     [Step::timing(20.0, 0.3), Step::delay(2.5), Step::timing(-100.0, 0.3)],
//! );
//! banner.tick(0.3);
//! assert_eq!(banner.value(), 20.0);
//! assert_eq!(banner.tick(3.0), Status::Finished);
//! assert_eq!(banner.value(), -100.0);
//! ```

use alloc::vec::Vec;

use log::{debug, trace};

use crate::animation::{Animation, Status, sanitize_dt};
use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::timing::Timing;

/// One stage of a [`Sequence`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Move to `to` over `duration` seconds along `easing`.
    Timing {
        /// End value.
        to: f64,
        /// Seconds.
        duration: f64,
        /// Curve.
        easing: Easing,
    },
    /// Hold the current value for the given number of seconds.
    Delay(f64),
    /// Spring toward `to`, starting at rest.
    Spring {
        /// End value.
        to: f64,
        /// Spring parameters.
        config: SpringConfig,
    },
}

impl Step {
    /// A timing step with the default [`Easing`].
    #[must_use]
    pub fn timing(to: f64, duration: f64) -> Self {
        Self::Timing {
            to,
            duration,
            easing: Easing::default(),
        }
    }

    /// A hold.
    #[must_use]
    pub fn delay(duration: f64) -> Self {
        Self::Delay(duration)
    }

    /// A spring step.
    #[must_use]
    pub fn spring(to: f64, config: SpringConfig) -> Self {
        Self::Spring { to, config }
    }
}

#[derive(Clone, Debug)]
enum Active {
    Timing(Timing),
    Delay { remaining: f64 },
    Spring(Spring),
}

impl Active {
    fn start(step: Step, from: f64) -> Self {
        match step {
            Step::Timing {
                to,
                duration,
                easing,
            } => Self::Timing(Timing::new(from, to, duration, easing)),
            Step::Delay(duration) => Self::Delay {
                remaining: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            },
            Step::Spring { to, config } => Self::Spring(Spring::new(from, to, config)),
        }
    }

    /// Returns the unused part of `dt` once the step completes.
    fn advance(&mut self, dt: f64) -> Option<f64> {
        match self {
            Self::Timing(timing) => timing.advance(dt),
            Self::Delay { remaining } => {
                if dt >= *remaining {
                    let rest = dt - *remaining;
                    *remaining = 0.0;
                    Some(rest)
                } else {
                    *remaining -= dt;
                    None
                }
            }
            // Springs settle on a tick boundary; nothing carries over.
            Self::Spring(spring) => spring.tick(dt).is_finished().then_some(0.0),
        }
    }

    fn value(&self, held: f64) -> f64 {
        match self {
            Self::Timing(timing) => timing.value(),
            Self::Delay { .. } => held,
            Self::Spring(spring) => spring.value(),
        }
    }
}

/// Runs [`Step`]s back to back on a single value.
#[derive(Clone, Debug)]
pub struct Sequence {
    steps: Vec<Step>,
    index: usize,
    active: Option<Active>,
    value: f64,
}

impl Sequence {
    /// Creates a sequence that starts at `initial` and runs `steps` in order.
    ///
    /// The first step begins on the first tick. An empty sequence is finished
    /// immediately.
    #[must_use]
    pub fn new(initial: f64, steps: impl IntoIterator<Item = Step>) -> Self {
        let steps: Vec<Step> = steps.into_iter().collect();
        let active = steps.first().map(|step| Active::start(*step, initial));
        Self {
            steps,
            index: 0,
            active,
            value: initial,
        }
    }

    /// The steps this sequence was built from.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Index of the step currently running, or `None` once finished.
    #[must_use]
    pub fn current_step(&self) -> Option<usize> {
        self.active.as_ref().map(|_| self.index)
    }

    /// Abandons the remaining steps, keeping the current value.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            debug!(
                "sequence stopped at step {} of {} with value {}",
                self.index,
                self.steps.len(),
                self.value
            );
        }
    }
}

impl Animation for Sequence {
    type Value = f64;

    fn value(&self) -> f64 {
        self.value
    }

    fn tick(&mut self, dt: f64) -> Status {
        let mut dt = sanitize_dt(dt);
        loop {
            let Some(active) = self.active.as_mut() else {
                return Status::Finished;
            };
            match active.advance(dt) {
                None => {
                    self.value = active.value(self.value);
                    trace!("sequence step {} at {}", self.index, self.value);
                    return Status::Running;
                }
                Some(rest) => {
                    self.value = active.value(self.value);
                    self.index += 1;
                    dt = rest;
                    self.active = self
                        .steps
                        .get(self.index)
                        .map(|step| Active::start(*step, self.value));
                    if self.active.is_none() {
                        debug!("sequence finished with value {}", self.value);
                    }
                }
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.active.is_none()
    }
}
