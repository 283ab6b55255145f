// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from absolute pointer positions to [`GestureEvent`]s.
//!
//! Hosts that receive raw pointer coordinates (rather than a platform pan
//! recognizer's cumulative deltas) can feed them through [`PointerTracker`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use corral_drag::{GestureEvent, PointerTracker};
//!
//! let mut pointer = PointerTracker::default();
//! assert_eq!(pointer.down(Point::new(100.0, 100.0)), GestureEvent::Start);
//! assert_eq!(
//!     pointer.moved(Point::new(130.0, 90.0)),
//!     Some(GestureEvent::Move(Vec2::new(30.0, -10.0)))
//! );
//! assert_eq!(pointer.up(), Some(GestureEvent::End));
//! ```

use kurbo::{Point, Vec2};

use crate::draggable::GestureEvent;

/// Tracks the pointer between down and up.
#[derive(Debug, Clone, Default, Copy)]
pub struct PointerTracker {
    /// Where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the gesture.
    pub last_pos: Option<Point>,
}

impl PointerTracker {
    /// Pointer pressed at `pos`: begins a gesture.
    ///
    /// A second press while one is already tracked re-anchors at `pos`.
    pub fn down(&mut self, pos: Point) -> GestureEvent {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        GestureEvent::Start
    }

    /// Pointer moved to `pos`: emits the total offset since the press.
    ///
    /// Returns `None` when no gesture is tracked or `pos` is not finite.
    pub fn moved(&mut self, pos: Point) -> Option<GestureEvent> {
        if !pos.is_finite() {
            return None;
        }
        let total = self.total_offset(pos)?;
        self.last_pos = Some(pos);
        Some(GestureEvent::Move(total))
    }

    /// Pointer released (or the platform cancelled the gesture).
    ///
    /// Returns `None` when no gesture is tracked.
    pub fn up(&mut self) -> Option<GestureEvent> {
        let was_tracking = self.is_tracking();
        self.start_pos = None;
        self.last_pos = None;
        was_tracking.then_some(GestureEvent::End)
    }

    /// Offset from the press position to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Returns `true` between [`down`](Self::down) and [`up`](Self::up).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}
