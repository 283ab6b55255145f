// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draggable-with-bounds state machine.

use corral_motion::SpringConfig;
use kurbo::{Point, Vec2};
use log::{debug, trace};

use crate::animator::{ReleaseAnimator, SnapBack};
use crate::bounds::{ArenaBounds, ArenaLayout};
use crate::error::ConfigError;
use crate::session::GestureTracker;

/// A pointer-gesture event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The gesture began.
    Start,
    /// The pointer has moved by this much in total since [`GestureEvent::Start`].
    Move(Vec2),
    /// The gesture ended, by release or by platform cancellation.
    End,
}

/// Which part of the interaction the component is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest; inside the arena after any release.
    #[default]
    Idle,
    /// Following an active gesture; may be outside the arena.
    Dragging,
    /// Springing back into the arena after an out-of-bounds release.
    SnappingBack,
}

/// What to do with a [`GestureEvent::Start`] while already dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlapPolicy {
    /// Drop the event and keep the current session.
    #[default]
    Ignore,
    /// Re-base the session on the current position, as if the gesture had
    /// just started there.
    Restart,
}

/// Constructor-time configuration for a [`Draggable`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableConfig {
    /// Arena and element dimensions. Default: [`ArenaLayout::default`].
    pub layout: ArenaLayout,
    /// Resting position before the first gesture. Default `(50, 50)`.
    ///
    /// It is not clamped; an out-of-bounds start stays put until the first
    /// release.
    pub initial_position: Point,
    /// Snap-back spring. Default: critically damped, see [`SpringConfig::default`].
    pub spring: SpringConfig,
    /// Overlapping-start policy. Default [`OverlapPolicy::Ignore`].
    pub overlap: OverlapPolicy,
}

impl Default for DraggableConfig {
    fn default() -> Self {
        Self {
            layout: ArenaLayout::default(),
            initial_position: Point::new(50.0, 50.0),
            spring: SpringConfig::default(),
            overlap: OverlapPolicy::default(),
        }
    }
}

/// A phase change caused by an event or tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Phase before.
    pub from: Phase,
    /// Phase after.
    pub to: Phase,
}

/// Outcome of [`Draggable::handle`] or [`Draggable::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Response {
    /// Position after processing.
    pub position: Point,
    /// The position changed, so the host should redraw.
    pub moved: bool,
    /// The phase changed.
    pub transition: Option<Transition>,
    /// `false` when the input had no meaning in the current phase and was
    /// dropped.
    pub handled: bool,
}

impl Response {
    fn ignored(position: Point) -> Self {
        Self {
            position,
            moved: false,
            transition: None,
            handled: false,
        }
    }
}

/// An element that drags freely and springs back inside its arena on release.
///
/// ```text
///            Start                         End (out of bounds)
///   Idle ─────────────► Dragging ─────────────────────► SnappingBack
///    ▲                   │    ▲                              │   │
///    │  End (in bounds)  │    │   Start (cancels animation)  │   │
///    └───────────────────┘    └──────────────────────────────┘   │
///    ▲                                                           │
///    └──────────────────── tick (settled) ───────────────────────┘
/// ```
///
/// Gesture events and animation ticks are expected on the same thread, in the
/// order the host observes them. The position is only ever written by the
/// gesture tracker while dragging and by the snap-back spring while snapping
/// back.
#[derive(Debug, Clone)]
pub struct Draggable {
    bounds: ArenaBounds,
    position: Point,
    tracker: GestureTracker,
    animator: ReleaseAnimator,
    snap: Option<SnapBack>,
    overlap: OverlapPolicy,
}

impl Draggable {
    /// Builds a draggable from `config`, deriving bounds from its layout.
    pub fn new(config: DraggableConfig) -> Result<Self, ConfigError> {
        let bounds = ArenaBounds::from_layout(&config.layout)?;
        Self::with_bounds(bounds, config)
    }

    /// Builds a draggable with explicit `bounds`; `config.layout` is ignored.
    pub fn with_bounds(bounds: ArenaBounds, config: DraggableConfig) -> Result<Self, ConfigError> {
        let p = config.initial_position;
        if !p.is_finite() {
            return Err(ConfigError::InitialPositionNonFinite { x: p.x, y: p.y });
        }
        config.spring.validate()?;
        debug!(
            "draggable at ({}, {}) in [{:?}, {:?}]",
            p.x,
            p.y,
            bounds.min(),
            bounds.max()
        );
        Ok(Self {
            bounds,
            position: p,
            tracker: GestureTracker::default(),
            animator: ReleaseAnimator::new(config.spring),
            snap: None,
            overlap: config.overlap,
        })
    }

    /// Current offset of the element from its layout origin.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.tracker.is_dragging() {
            Phase::Dragging
        } else if self.snap.is_some() {
            Phase::SnappingBack
        } else {
            Phase::Idle
        }
    }

    /// The arena the element rests in.
    #[must_use]
    pub fn bounds(&self) -> &ArenaBounds {
        &self.bounds
    }

    /// Returns `true` while a snap-back is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    /// Origin offset of the active drag session, if dragging.
    #[must_use]
    pub fn session_origin(&self) -> Option<Point> {
        self.tracker.session().map(|s| s.origin_offset)
    }

    /// Where the in-flight snap-back will land, if any.
    #[must_use]
    pub fn snap_target(&self) -> Option<Point> {
        self.snap.as_ref().map(SnapBack::target)
    }

    /// Applies one gesture event.
    pub fn handle(&mut self, event: GestureEvent) -> Response {
        match event {
            GestureEvent::Start => self.on_start(),
            GestureEvent::Move(delta) => self.on_move(delta),
            GestureEvent::End => self.on_end(),
        }
    }

    /// Advances a running snap-back by `dt` seconds.
    ///
    /// Outside [`Phase::SnappingBack`] this does nothing and reports the event
    /// as not handled.
    pub fn tick(&mut self, dt: f64) -> Response {
        let Some(snap) = self.snap.as_mut() else {
            return Response::ignored(self.position);
        };
        let step = snap.tick(dt);
        let moved = step.position != self.position;
        self.position = step.position;
        trace!("snap-back tick at ({}, {})", step.position.x, step.position.y);

        let transition = step.settled.then(|| {
            self.snap = None;
            self.transition(Phase::SnappingBack, Phase::Idle)
        });
        Response {
            position: self.position,
            moved,
            transition,
            handled: true,
        }
    }

    fn on_start(&mut self) -> Response {
        let from = self.phase();
        match from {
            Phase::Idle => {}
            Phase::SnappingBack => {
                if let Some(snap) = self.snap.take() {
                    self.position = snap.cancel();
                }
            }
            Phase::Dragging => match self.overlap {
                OverlapPolicy::Ignore => {
                    debug!("ignoring gesture start while dragging");
                    return Response::ignored(self.position);
                }
                OverlapPolicy::Restart => {
                    debug!("restarting drag session at current position");
                    self.tracker.start(self.position);
                    return Response {
                        position: self.position,
                        moved: false,
                        transition: None,
                        handled: true,
                    };
                }
            },
        }
        self.tracker.start(self.position);
        Response {
            position: self.position,
            moved: false,
            transition: Some(self.transition(from, Phase::Dragging)),
            handled: true,
        }
    }

    fn on_move(&mut self, delta: Vec2) -> Response {
        if !delta.is_finite() {
            return Response::ignored(self.position);
        }
        let Some(next) = self.tracker.update(delta) else {
            return Response::ignored(self.position);
        };
        let moved = next != self.position;
        self.position = next;
        trace!("drag to ({}, {})", next.x, next.y);
        Response {
            position: next,
            moved,
            transition: None,
            handled: true,
        }
    }

    fn on_end(&mut self) -> Response {
        let Some(released) = self.tracker.end() else {
            return Response::ignored(self.position);
        };
        self.position = released;
        self.snap = self.animator.release(released, &self.bounds);
        let to = if self.snap.is_some() {
            Phase::SnappingBack
        } else {
            Phase::Idle
        };
        Response {
            position: released,
            moved: false,
            transition: Some(self.transition(Phase::Dragging, to)),
            handled: true,
        }
    }

    fn transition(&self, from: Phase, to: Phase) -> Transition {
        debug!(
            "{from:?} -> {to:?} at ({}, {})",
            self.position.x, self.position.y
        );
        Transition { from, to }
    }
}
