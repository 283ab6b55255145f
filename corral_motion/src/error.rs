// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Rejected [`SpringConfig`](crate::SpringConfig) parameters.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SpringError {
    /// A parameter was NaN or infinite.
    #[error("spring {field} must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A parameter that must be strictly positive was zero or negative.
    #[error("spring {field} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Damping was negative, which would make the spring gain energy.
    #[error("spring damping must not be negative, got {0}")]
    NegativeDamping(f64),
    /// Damping is zero and there is no finite `max_duration`, so the spring
    /// would oscillate forever.
    #[error("undamped spring needs a finite max_duration")]
    NeverSettles,
}

/// Rejected [`Interpolation`](crate::Interpolation) ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// Input and output ranges have different lengths.
    #[error("input range has {input} points but output range has {output}")]
    LengthMismatch {
        /// Number of input points.
        input: usize,
        /// Number of output points.
        output: usize,
    },
    /// Fewer than two points were given.
    #[error("interpolation needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    /// A point was NaN or infinite.
    #[error("interpolation points must be finite")]
    NonFinite,
    /// Input point `index` is not greater than the one before it.
    #[error("input range must be strictly increasing (at index {index})")]
    NotIncreasing {
        /// Index of the offending input point.
        index: usize,
    },
}
