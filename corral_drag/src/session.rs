// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking: turn cumulative gesture deltas into element positions.
//!
//! ## Usage
//!
//! 1) Start a session with [`GestureTracker::start`], passing the element's
//!    current position. That position becomes the session's origin offset.
//! 2) On each move sample, call [`GestureTracker::update`] with the delta
//!    since the gesture started (not since the previous sample).
//! 3) End with [`GestureTracker::end`], which returns the final position and
//!    forgets the session, so the next start captures a fresh origin.
//!
//! Cumulative deltas make dropped samples harmless: the next sample still
//! lands on the right spot.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use corral_drag::GestureTracker;
//!
//! let mut tracker = GestureTracker::default();
//!
//! // The element rests at (50, 50) when the finger goes down.
//! tracker.start(Point::new(50.0, 50.0));
//! assert!(tracker.is_dragging());
//!
//! // The finger has moved (30, -10) in total.
//! let pos = tracker.update(Vec2::new(30.0, -10.0)).unwrap();
//! assert_eq!(pos, Point::new(80.0, 40.0));
//!
//! // Lift: the last position is final.
//! assert_eq!(tracker.end(), Some(Point::new(80.0, 40.0)));
//! assert!(!tracker.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Bookkeeping for one gesture, from start to end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Element position when the gesture started.
    pub origin_offset: Point,
    /// Latest cumulative delta since the gesture started.
    pub delta: Vec2,
}

impl DragSession {
    /// Opens a session at `origin_offset` with no movement yet.
    #[must_use]
    pub fn new(origin_offset: Point) -> Self {
        Self {
            origin_offset,
            delta: Vec2::ZERO,
        }
    }

    /// Element position implied by the latest delta.
    #[must_use]
    pub fn position(&self) -> Point {
        self.origin_offset + self.delta
    }
}

/// Tracks at most one drag session.
#[derive(Debug, Clone, Default, Copy)]
pub struct GestureTracker {
    session: Option<DragSession>,
}

impl GestureTracker {
    /// Starts a new session whose origin offset is `position`.
    ///
    /// Replaces any session already in progress.
    pub fn start(&mut self, position: Point) {
        self.session = Some(DragSession::new(position));
    }

    /// Applies a cumulative delta, returning the new element position.
    ///
    /// Returns `None` when no session is active.
    pub fn update(&mut self, delta: Vec2) -> Option<Point> {
        let session = self.session.as_mut()?;
        session.delta = delta;
        Some(session.position())
    }

    /// Ends the session, returning the final element position.
    ///
    /// Returns `None` when no session is active.
    pub fn end(&mut self) -> Option<Point> {
        self.session.take().map(|session| session.position())
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}
