// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corral_motion::SpringError;
use thiserror::Error;

use crate::bounds::Axis;

/// Arena geometry that cannot hold the element.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum BoundsError {
    /// The allowed range on one axis is empty, typically because the element
    /// is larger than the arena.
    #[error("arena has no room along {axis:?}: max {max} is below min {min}")]
    EmptyRange {
        /// Axis with the empty range.
        axis: Axis,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// A dimension or corner was NaN or infinite.
    #[error("arena {field} must be finite")]
    NonFinite {
        /// Name of the offending value.
        field: &'static str,
    },
}

/// Rejected [`DraggableConfig`](crate::DraggableConfig).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The arena layout does not produce usable bounds.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// The snap-back spring cannot settle.
    #[error(transparent)]
    Spring(#[from] SpringError),
    /// The starting position was NaN or infinite.
    #[error("initial position must be finite, got ({x}, {y})")]
    InitialPositionNonFinite {
        /// Rejected x.
        x: f64,
        /// Rejected y.
        y: f64,
    },
}
