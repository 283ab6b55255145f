// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped harmonic oscillator springs.
//!
//! Both [`Spring`] (scalar) and [`Spring2`] (2D point) evaluate the closed-form
//! solution of `m·x'' + c·x' + k·x = 0` at the total elapsed time, rather than
//! integrating step by step. Tick intervals therefore never accumulate error:
//! ticking `0.5` twice lands on exactly the same value as ticking `1.0` once.
//!
//! ## Minimal example
//!
//! ```
//! use corral_motion::{Animation, Spring, SpringConfig};
//!
//! let mut spring = Spring::new(0.0, 100.0, SpringConfig::default());
//! while !spring.tick(1.0 / 60.0).is_finished() {}
//! assert_eq!(spring.value(), 100.0);
//! ```

use kurbo::{Point, Vec2};
use log::{debug, trace};

use crate::animation::{Animation, Status, sanitize_dt};
use crate::error::SpringError;

/// Stiffness produced by an origami tension of `40`, the stock spring of most
/// mobile UI toolkits.
pub const DEFAULT_STIFFNESS: f64 = 230.2;

/// Default displacement and speed below which a spring counts as at rest.
pub const DEFAULT_REST_THRESHOLD: f64 = 0.001;

/// Default cutoff, in seconds of animation time, after which a spring is
/// forced onto its target.
pub const DEFAULT_MAX_DURATION: f64 = 10.0;

/// Ratios within this distance of `1.0` use the critically damped solution.
const CRITICAL_EPSILON: f64 = 1e-6;

/// Physical parameters of a spring animation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    /// Spring constant `k`. Higher values pull harder toward the target.
    pub stiffness: f64,
    /// Damping coefficient `c`. Zero oscillates forever.
    pub damping: f64,
    /// Mass `m` of the animated object.
    pub mass: f64,
    /// Displacement from the target below which the spring may settle.
    pub rest_displacement: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
    /// Settle as soon as the value reaches or crosses the target.
    pub overshoot_clamping: bool,
    /// Seconds of animation time after which the spring snaps to its target.
    ///
    /// `None` runs until the rest thresholds are met.
    pub max_duration: Option<f64>,
}

impl SpringConfig {
    /// A critically damped spring with the given stiffness and unit mass.
    ///
    /// Critically damped springs never overshoot when started from rest, so the
    /// distance to the target shrinks on every tick.
    #[must_use]
    pub fn critically_damped(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * libm::sqrt(stiffness),
            mass: 1.0,
            rest_displacement: DEFAULT_REST_THRESHOLD,
            rest_speed: DEFAULT_REST_THRESHOLD,
            overshoot_clamping: false,
            max_duration: Some(DEFAULT_MAX_DURATION),
        }
    }

    /// Converts origami-style `tension` and `friction` into stiffness/damping.
    ///
    /// `from_tension_friction(40.0, 7.0)` is the classic bouncy default;
    /// `from_tension_friction(100.0, 8.0)` is a snappier variant used for
    /// expanding buttons.
    #[must_use]
    pub fn from_tension_friction(tension: f64, friction: f64) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            ..Self::critically_damped(DEFAULT_STIFFNESS)
        }
    }

    /// Returns a copy with different rest thresholds.
    #[must_use]
    pub fn with_rest_thresholds(mut self, displacement: f64, speed: f64) -> Self {
        self.rest_displacement = displacement;
        self.rest_speed = speed;
        self
    }

    /// Returns a copy with overshoot clamping toggled.
    #[must_use]
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Returns a copy with a different max-duration cutoff.
    #[must_use]
    pub fn with_max_duration(mut self, max_duration: Option<f64>) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        libm::sqrt(self.stiffness / self.mass)
    }

    /// Damping ratio `ζ = c / (2·sqrt(k·m))`.
    ///
    /// `1.0` is critically damped, below is bouncy, above is sluggish.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * libm::sqrt(self.stiffness * self.mass))
    }

    /// Checks that the parameters describe a spring that can settle.
    pub fn validate(&self) -> Result<(), SpringError> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_displacement", self.rest_displacement),
            ("rest_speed", self.rest_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SpringError::NonFinite { field });
            }
        }
        for (field, value) in [
            ("stiffness", self.stiffness),
            ("mass", self.mass),
            ("rest_displacement", self.rest_displacement),
            ("rest_speed", self.rest_speed),
        ] {
            if value <= 0.0 {
                return Err(SpringError::NotPositive { field, value });
            }
        }
        if self.damping < 0.0 {
            return Err(SpringError::NegativeDamping(self.damping));
        }
        if let Some(max) = self.max_duration {
            if max.is_nan() {
                return Err(SpringError::NonFinite {
                    field: "max_duration",
                });
            }
            if max <= 0.0 {
                return Err(SpringError::NotPositive {
                    field: "max_duration",
                    value: max,
                });
            }
        }
        // Undamped springs only stop at the cutoff.
        if self.damping == 0.0 && self.max_duration.is_none_or(f64::is_infinite) {
            return Err(SpringError::NeverSettles);
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    /// Critically damped with [`DEFAULT_STIFFNESS`].
    fn default() -> Self {
        Self::critically_damped(DEFAULT_STIFFNESS)
    }
}

/// Closed-form solution for one axis, in target-relative coordinates.
#[derive(Clone, Copy, Debug)]
struct Oscillator {
    omega0: f64,
    zeta: f64,
    x0: f64,
    v0: f64,
}

impl Oscillator {
    fn new(config: &SpringConfig, x0: f64, v0: f64) -> Self {
        Self {
            omega0: config.natural_frequency(),
            zeta: config.damping_ratio(),
            x0,
            v0,
        }
    }

    /// Displacement from the target and velocity at time `t`.
    fn sample(&self, t: f64) -> (f64, f64) {
        let Self {
            omega0,
            zeta,
            x0,
            v0,
        } = *self;
        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let envelope = libm::exp(-omega0 * t);
            let b = v0 + omega0 * x0;
            let x = (x0 + b * t) * envelope;
            let v = b * envelope - omega0 * x;
            (x, v)
        } else if zeta < 1.0 {
            let omega1 = omega0 * libm::sqrt(1.0 - zeta * zeta);
            let decay = zeta * omega0;
            let envelope = libm::exp(-decay * t);
            let (sin, cos) = (libm::sin(omega1 * t), libm::cos(omega1 * t));
            let b = v0 + decay * x0;
            let x = envelope * (x0 * cos + (b / omega1) * sin);
            let v = envelope * (b * cos - x0 * omega1 * sin) - decay * x;
            (x, v)
        } else {
            let root = omega0 * libm::sqrt(zeta * zeta - 1.0);
            let r1 = -zeta * omega0 + root;
            let r2 = -zeta * omega0 - root;
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let (e1, e2) = (libm::exp(r1 * t), libm::exp(r2 * t));
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }
}

/// A scalar spring animation from a start value toward a fixed target.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    target: f64,
    oscillator: Oscillator,
    elapsed: f64,
    value: f64,
    velocity: f64,
    finished: bool,
}

impl Spring {
    /// Starts a spring at rest at `from`, pulled toward `to`.
    #[must_use]
    pub fn new(from: f64, to: f64, config: SpringConfig) -> Self {
        Self::with_velocity(from, to, 0.0, config)
    }

    /// Starts a spring at `from` moving with `velocity` units per second.
    ///
    /// A spring that starts on its target with no velocity is finished
    /// immediately.
    #[must_use]
    pub fn with_velocity(from: f64, to: f64, velocity: f64, config: SpringConfig) -> Self {
        let finished = from == to && velocity == 0.0;
        Self {
            config,
            target: to,
            oscillator: Oscillator::new(&config, from - to, velocity),
            elapsed: 0.0,
            value: if finished { to } else { from },
            velocity,
            finished,
        }
    }

    /// The value the spring is pulled toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Seconds of animation time consumed so far.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Parameters this spring was started with.
    #[must_use]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Value the spring would have after `t` seconds, ignoring settling.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        self.target + self.oscillator.sample(t.max(0.0)).0
    }

    /// Freezes the spring at its current value.
    pub fn stop(&mut self) {
        if !self.finished {
            trace!("spring stopped at {} after {}s", self.value, self.elapsed);
        }
        self.finished = true;
        self.velocity = 0.0;
    }

    fn settle(&mut self) {
        debug!(
            "spring settled on {} after {:.3}s",
            self.target, self.elapsed
        );
        self.value = self.target;
        self.velocity = 0.0;
        self.finished = true;
    }

    fn crossed_target(&self, displacement: f64) -> bool {
        let x0 = self.oscillator.x0;
        x0 != 0.0 && (displacement == 0.0 || displacement.signum() != x0.signum())
    }
}

impl Animation for Spring {
    type Value = f64;

    fn value(&self) -> f64 {
        self.value
    }

    fn tick(&mut self, dt: f64) -> Status {
        if self.finished {
            return Status::Finished;
        }
        self.elapsed += sanitize_dt(dt);
        let (x, v) = self.oscillator.sample(self.elapsed);
        if !x.is_finite() || !v.is_finite() {
            self.settle();
            return Status::Finished;
        }
        self.value = self.target + x;
        self.velocity = v;

        let at_rest = x.abs() <= self.config.rest_displacement && v.abs() <= self.config.rest_speed;
        let overshot = self.config.overshoot_clamping && self.crossed_target(x);
        let timed_out = self
            .config
            .max_duration
            .is_some_and(|max| self.elapsed >= max);
        if at_rest || overshot || timed_out {
            self.settle();
            Status::Finished
        } else {
            Status::Running
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// A spring animation over a 2D point, one oscillator per axis.
///
/// Both axes share one [`SpringConfig`]. Each axis settles independently; the
/// animation finishes when both have.
#[derive(Clone, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    /// Starts a spring at rest at `from`, pulled toward `to`.
    #[must_use]
    pub fn new(from: Point, to: Point, config: SpringConfig) -> Self {
        Self::with_velocity(from, to, Vec2::ZERO, config)
    }

    /// Starts a spring at `from` moving with `velocity` units per second.
    #[must_use]
    pub fn with_velocity(from: Point, to: Point, velocity: Vec2, config: SpringConfig) -> Self {
        Self {
            x: Spring::with_velocity(from.x, to.x, velocity.x, config),
            y: Spring::with_velocity(from.y, to.y, velocity.y, config),
        }
    }

    /// The point the spring is pulled toward.
    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity(), self.y.velocity())
    }

    /// Seconds of animation time consumed so far.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.x.elapsed().max(self.y.elapsed())
    }

    /// Parameters this spring was started with.
    #[must_use]
    pub fn config(&self) -> &SpringConfig {
        self.x.config()
    }

    /// Freezes the spring at its current value.
    pub fn stop(&mut self) {
        self.x.stop();
        self.y.stop();
    }
}

impl Animation for Spring2 {
    type Value = Point;

    fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    fn tick(&mut self, dt: f64) -> Status {
        let x = self.x.tick(dt);
        let y = self.y.tick(dt);
        if x.is_finished() && y.is_finished() {
            Status::Finished
        } else {
            Status::Running
        }
    }

    fn is_finished(&self) -> bool {
        self.x.is_finished() && self.y.is_finished()
    }
}
