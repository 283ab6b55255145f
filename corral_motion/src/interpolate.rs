// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear mapping from an animated value to a display property.
//!
//! Animations usually run over a normalized range such as `0..1`, and each
//! property that follows them maps that range onto its own: a pulse drives
//! scale `1 → 1.2` and opacity `1 → 0.7` from the same value.
//!
//! ```
//! use corral_motion::{Extrapolate, Interpolation};
//!
//! let scale = Interpolation::new([0.0, 1.0], [1.0, 1.2]).unwrap();
//! assert!((scale.map(0.5) - 1.1).abs() < 1e-12);
//!
//! // Outside the input range the last segment is extended unless clamped.
//! assert!((scale.map(2.0) - 1.4).abs() < 1e-12);
//! let clamped = scale.with_extrapolate(Extrapolate::Clamp);
//! assert_eq!(clamped.map(2.0), 1.2);
//! ```

use alloc::vec::Vec;

use crate::error::InterpolationError;

/// What [`Interpolation::map`] does with values outside the input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolate {
    /// Continue the first or last segment's slope.
    #[default]
    Extend,
    /// Hold the first or last output value.
    Clamp,
}

/// A validated piecewise-linear map from input points to output points.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    /// Maps `input[i]` to `output[i]`, linearly in between.
    ///
    /// Both ranges must have the same length, at least two finite points, and
    /// `input` must be strictly increasing. `output` may go in any direction.
    pub fn new(
        input: impl IntoIterator<Item = f64>,
        output: impl IntoIterator<Item = f64>,
    ) -> Result<Self, InterpolationError> {
        let input: Vec<f64> = input.into_iter().collect();
        let output: Vec<f64> = output.into_iter().collect();
        if input.len() != output.len() {
            return Err(InterpolationError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(InterpolationError::TooFewPoints(input.len()));
        }
        if !input.iter().chain(&output).all(|v| v.is_finite()) {
            return Err(InterpolationError::NonFinite);
        }
        if let Some(index) = (1..input.len()).find(|&i| input[i] <= input[i - 1]) {
            return Err(InterpolationError::NotIncreasing { index });
        }
        Ok(Self {
            input,
            output,
            extrapolate: Extrapolate::default(),
        })
    }

    /// Returns a copy with a different out-of-range behavior.
    #[must_use]
    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Input points.
    #[must_use]
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Output points.
    #[must_use]
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Out-of-range behavior.
    #[must_use]
    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Maps `value` through the ranges.
    ///
    /// NaN maps to the first output point.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;
        if value.is_nan() {
            return self.output[0];
        }
        let value = match self.extrapolate {
            Extrapolate::Extend => value,
            Extrapolate::Clamp => value.clamp(self.input[0], self.input[last]),
        };
        // Segment `i` spans `input[i]..input[i + 1]`; the outer segments extend.
        let i = self.input[1..last].partition_point(|&x| x <= value);
        let (a, b) = (self.input[i], self.input[i + 1]);
        let (lo, hi) = (self.output[i], self.output[i + 1]);
        let t = (value - a) / (b - a);
        if t == 1.0 {
            return hi;
        }
        lo + (hi - lo) * t
    }
}
