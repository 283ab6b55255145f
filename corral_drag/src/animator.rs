// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corral_motion::{Animation, Spring2, SpringConfig};
use kurbo::Point;
use log::{debug, trace};

use crate::bounds::ArenaBounds;

/// Decides whether a release needs a snap-back and builds it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReleaseAnimator {
    spring: SpringConfig,
}

impl ReleaseAnimator {
    /// An animator that snaps back with `spring`.
    #[must_use]
    pub fn new(spring: SpringConfig) -> Self {
        Self { spring }
    }

    /// Spring parameters used for snap-backs.
    #[must_use]
    pub fn spring(&self) -> &SpringConfig {
        &self.spring
    }

    /// Starts a snap-back if `position` lies outside `bounds`.
    ///
    /// Returns `None`, and touches nothing, when `position` is already inside.
    #[must_use]
    pub fn release(&self, position: Point, bounds: &ArenaBounds) -> Option<SnapBack> {
        let target = bounds.clamp(position);
        if target == position {
            trace!("released in bounds at ({}, {})", position.x, position.y);
            return None;
        }
        debug!(
            "snap-back from ({}, {}) to ({}, {})",
            position.x, position.y, target.x, target.y
        );
        Some(SnapBack {
            spring: Spring2::new(position, target, self.spring),
            released_at: position,
            updates: 0,
        })
    }
}

/// Result of advancing a [`SnapBack`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapStep {
    /// Position after this tick.
    pub position: Point,
    /// `true` once the position rests on the target.
    pub settled: bool,
}

/// An in-flight spring from a released position back into bounds.
#[derive(Debug, Clone)]
pub struct SnapBack {
    spring: Spring2,
    released_at: Point,
    updates: usize,
}

impl SnapBack {
    /// Where the element was released.
    #[must_use]
    pub fn released_at(&self) -> Point {
        self.released_at
    }

    /// Where the element will come to rest.
    #[must_use]
    pub fn target(&self) -> Point {
        self.spring.target()
    }

    /// Last applied position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.spring.value()
    }

    /// Number of ticks that produced a position so far.
    #[must_use]
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Returns `true` once the spring has settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.spring.is_finished()
    }

    /// Advances the spring by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> SnapStep {
        let settled = self.spring.tick(dt).is_finished();
        self.updates += 1;
        let position = self.spring.value();
        if settled {
            debug!(
                "snap-back settled at ({}, {}) after {} ticks",
                position.x, position.y, self.updates
            );
        }
        SnapStep { position, settled }
    }

    /// Stops the spring where it is, returning the last applied position.
    pub fn cancel(mut self) -> Point {
        self.spring.stop();
        let position = self.spring.value();
        debug!(
            "snap-back cancelled at ({}, {}) after {} ticks",
            position.x, position.y, self.updates
        );
        position
    }
}
