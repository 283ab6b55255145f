// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corral_motion --heading-base-level=0

//! Corral Motion: host-agnostic animation primitives.
//!
//! This crate provides small animation building blocks that advance only when
//! the host ticks them. Nothing here owns a clock, a frame callback, or a
//! scene; a UI layer calls [`Animation::tick`] once per display refresh with the
//! elapsed seconds and reads [`Animation::value`] back.
//!
//! - [`Spring`] / [`Spring2`]: damped springs over a scalar or a 2D point,
//!   evaluated in closed form so results do not depend on tick size.
//! - [`Timing`]: fixed-duration interpolation along an [`Easing`] curve.
//! - [`Sequence`]: back-to-back [`Step`]s (timing, delay, spring) on one value.
//! - [`Interpolation`]: piecewise-linear mapping from an animated value onto a
//!   display property such as scale or opacity.
//!
//! ## Springs
//!
//! ```rust
//! use kurbo::Point;
//! use corral_motion::{Animation, Spring2, SpringConfig};
//!
//! // Pull a point back inside a box.
//! let mut snap = Spring2::new(
//!     Point::new(250.0, 100.0),
//!     Point::new(220.0, 100.0),
//!     SpringConfig::default(),
//! );
//! let mut frames = 0;
//! while !snap.tick(1.0 / 60.0).is_finished() {
//!     frames += 1;
//! }
//! assert_eq!(snap.value(), Point::new(220.0, 100.0));
//! assert!(frames < 600);
//! ```
//!
//! [`SpringConfig::default`] is critically damped. Use
//! [`SpringConfig::from_tension_friction`] to reproduce the bouncier
//! origami-style presets common on mobile platforms.
//!
//! ## Sequences
//!
//! ```rust
//! use corral_motion::{Animation, Easing, Sequence, Step};
//!
//! // Scale up and back down, half a second each way.
//! let mut pulse = Sequence::new(
//!     0.0,
//!     [
//!         Step::Timing { to: 1.0, duration: 0.5, easing: Easing::EaseInOut },
//!         Step::Timing { to: 0.0, duration: 0.5, easing: Easing::EaseInOut },
//!     ],
//! );
//! pulse.tick(0.5);
//! assert_eq!(pulse.value(), 1.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with the standard library.
//! - `libm`: build Kurbo in `no_std` mode.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration types.
//!
//! Transcendental math always goes through `libm`, so spring curves are
//! bit-identical with and without `std`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod easing;
mod error;
mod interpolate;
mod sequence;
mod spring;
mod timing;

pub use animation::{Animation, Status};
pub use easing::Easing;
pub use error::{InterpolationError, SpringError};
pub use interpolate::{Extrapolate, Interpolation};
pub use sequence::{Sequence, Step};
pub use spring::{
    DEFAULT_MAX_DURATION, DEFAULT_REST_THRESHOLD, DEFAULT_STIFFNESS, Spring, Spring2,
    SpringConfig,
};
pub use timing::Timing;
