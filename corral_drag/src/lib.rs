// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corral_drag --heading-base-level=0

//! Corral Drag: a draggable element that springs back inside its arena.
//!
//! The element follows the pointer freely while a gesture is active, even
//! outside the arena. When the gesture ends outside, it springs back to the
//! nearest in-bounds point; when it ends inside, it simply stays put.
//!
//! The pieces, leaves first:
//!
//! - [`ArenaBounds`] and [`clamp`]: the rectangle the element must rest in and
//!   the pure function that maps any point into it.
//! - [`GestureTracker`]: turns cumulative gesture deltas into positions,
//!   relative to where the element was when the gesture began.
//! - [`ReleaseAnimator`] / [`SnapBack`]: decide on release whether a spring is
//!   needed and run it.
//! - [`Draggable`]: owns the position and routes [`GestureEvent`]s and ticks
//!   through the `Idle` / `Dragging` / `SnappingBack` state machine.
//! - [`PointerTracker`]: optional adapter for hosts that see absolute pointer
//!   coordinates instead of cumulative deltas.
//!
//! The crate does not assume any particular UI framework. The host forwards
//! gesture events, calls [`Draggable::tick`] once per display refresh, and
//! places the element at [`Draggable::position`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use corral_drag::{Draggable, DraggableConfig, GestureEvent, Phase};
//!
//! // 300-wide arena, 80x80 element, vertical travel capped at 150.
//! let mut item = Draggable::new(DraggableConfig::default()).unwrap();
//! assert_eq!(item.position(), Point::new(50.0, 50.0));
//!
//! // Drag 200 to the right, past the right edge, and let go.
//! item.handle(GestureEvent::Start);
//! item.handle(GestureEvent::Move(Vec2::new(200.0, 50.0)));
//! item.handle(GestureEvent::End);
//! assert_eq!(item.phase(), Phase::SnappingBack);
//! assert_eq!(item.snap_target(), Some(Point::new(220.0, 100.0)));
//!
//! // Drive the spring from the host's frame loop.
//! while item.phase() == Phase::SnappingBack {
//!     item.tick(1.0 / 60.0);
//! }
//! assert_eq!(item.position(), Point::new(220.0, 100.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and `corral_motion` with the standard library.
//! - `libm`: build them in `no_std` mode.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` compatible.

#![no_std]

mod animator;
mod bounds;
mod draggable;
mod error;
mod pointer;
mod session;

pub use animator::{ReleaseAnimator, SnapBack, SnapStep};
pub use bounds::{ArenaBounds, ArenaLayout, Axis, clamp};
pub use draggable::{
    Draggable, DraggableConfig, GestureEvent, OverlapPolicy, Phase, Response, Transition,
};
pub use error::{BoundsError, ConfigError};
pub use pointer::PointerTracker;
pub use session::{DragSession, GestureTracker};

pub use corral_motion::SpringConfig;
