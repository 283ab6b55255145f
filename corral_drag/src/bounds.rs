// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena bounds and the release clamp.
//!
//! Positions are offsets of the element's top-left corner from the arena
//! origin, so the allowed range on each axis is `[0, arena - element]` unless
//! a layout overrides it.

use kurbo::{Point, Rect};

use crate::error::BoundsError;

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Layout dimensions used to derive [`ArenaBounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaLayout {
    /// Width of the arena. Default `300`.
    pub arena_width: f64,
    /// Height of the arena. Default `250`.
    pub arena_height: f64,
    /// Width of the draggable element. Default `80`.
    pub element_width: f64,
    /// Height of the draggable element. Default `80`.
    pub element_height: f64,
    /// Fixed lower edge for the element's offset, replacing
    /// `arena_height - element_height`. Default `Some(150)`.
    pub max_y: Option<f64>,
    /// Extra space kept free at the right edge. Default `0`.
    pub inset: f64,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            arena_width: 300.0,
            arena_height: 250.0,
            element_width: 80.0,
            element_height: 80.0,
            max_y: Some(150.0),
            inset: 0.0,
        }
    }
}

/// The closed rectangle the element's offset must lie in once released.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaBounds {
    min: Point,
    max: Point,
}

impl ArenaBounds {
    /// Creates bounds from explicit corners.
    ///
    /// Fails if any coordinate is non-finite or `max < min` on either axis.
    /// Degenerate (zero-width) ranges are allowed and pin that axis.
    pub fn new(min: Point, max: Point) -> Result<Self, BoundsError> {
        for (field, value) in [
            ("min_x", min.x),
            ("min_y", min.y),
            ("max_x", max.x),
            ("max_y", max.y),
        ] {
            if !value.is_finite() {
                return Err(BoundsError::NonFinite { field });
            }
        }
        if max.x < min.x {
            return Err(BoundsError::EmptyRange {
                axis: Axis::X,
                min: min.x,
                max: max.x,
            });
        }
        if max.y < min.y {
            return Err(BoundsError::EmptyRange {
                axis: Axis::Y,
                min: min.y,
                max: max.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Derives bounds from arena and element dimensions.
    ///
    /// `min` is the origin; `max_x = arena_width - element_width - inset` and
    /// `max_y = layout.max_y` or, when unset, `arena_height - element_height`.
    pub fn from_layout(layout: &ArenaLayout) -> Result<Self, BoundsError> {
        for (field, value) in [
            ("arena_width", layout.arena_width),
            ("arena_height", layout.arena_height),
            ("element_width", layout.element_width),
            ("element_height", layout.element_height),
            ("inset", layout.inset),
        ] {
            if !value.is_finite() {
                return Err(BoundsError::NonFinite { field });
            }
        }
        let max_x = layout.arena_width - layout.element_width - layout.inset;
        let max_y = layout
            .max_y
            .unwrap_or(layout.arena_height - layout.element_height);
        Self::new(Point::ORIGIN, Point::new(max_x, max_y))
    }

    /// Smallest allowed offset.
    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    /// Largest allowed offset.
    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    /// The bounds as a rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.min, self.max)
    }

    /// Returns `true` if `p` lies inside the bounds, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Nearest point inside the bounds. See [`clamp`].
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            clamp_axis(p.x, self.min.x, self.max.x),
            clamp_axis(p.y, self.min.y, self.max.y),
        )
    }
}

/// Maps `position` to the nearest point inside `bounds`.
///
/// Each axis is clamped independently: `x' = max(min_x, min(max_x, x))`, and
/// likewise for `y`. NaN coordinates map to the lower bound.
#[must_use]
pub fn clamp(position: Point, bounds: &ArenaBounds) -> Point {
    bounds.clamp(position)
}

fn clamp_axis(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { lo.max(hi.min(v)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_bounds() -> ArenaBounds {
        ArenaBounds::from_layout(&ArenaLayout::default()).unwrap()
    }

    #[test]
    fn default_layout_gives_demo_bounds() {
        let bounds = demo_bounds();
        assert_eq!(bounds.min(), Point::ORIGIN);
        assert_eq!(bounds.max(), Point::new(220.0, 150.0));
    }

    #[test]
    fn max_y_falls_back_to_arena_height() {
        let layout = ArenaLayout {
            max_y: None,
            ..ArenaLayout::default()
        };
        let bounds = ArenaBounds::from_layout(&layout).unwrap();
        assert_eq!(bounds.max(), Point::new(220.0, 170.0));
    }

    #[test]
    fn inset_shrinks_horizontal_range() {
        let layout = ArenaLayout {
            arena_width: 390.0,
            element_width: 80.0,
            inset: 100.0,
            ..ArenaLayout::default()
        };
        let bounds = ArenaBounds::from_layout(&layout).unwrap();
        assert_eq!(bounds.max().x, 210.0);
    }

    #[test]
    fn element_wider_than_arena_is_rejected() {
        let layout = ArenaLayout {
            arena_width: 60.0,
            ..ArenaLayout::default()
        };
        assert_eq!(
            ArenaBounds::from_layout(&layout),
            Err(BoundsError::EmptyRange {
                axis: Axis::X,
                min: 0.0,
                max: -20.0
            })
        );
    }

    #[test]
    fn inverted_y_corners_are_rejected() {
        let err = ArenaBounds::new(Point::new(0.0, 10.0), Point::new(5.0, 0.0)).unwrap_err();
        assert!(matches!(err, BoundsError::EmptyRange { axis: Axis::Y, .. }));
    }

    #[test]
    fn non_finite_dimensions_are_rejected() {
        let layout = ArenaLayout {
            element_height: f64::INFINITY,
            ..ArenaLayout::default()
        };
        assert_eq!(
            ArenaBounds::from_layout(&layout),
            Err(BoundsError::NonFinite {
                field: "element_height"
            })
        );
        assert_eq!(
            ArenaBounds::new(Point::ORIGIN, Point::new(f64::NAN, 1.0)),
            Err(BoundsError::NonFinite { field: "max_x" })
        );
    }

    #[test]
    fn zero_width_range_pins_axis() {
        let bounds = ArenaBounds::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0)).unwrap();
        assert_eq!(bounds.clamp(Point::new(-3.0, 4.0)), Point::new(5.0, 4.0));
        assert_eq!(bounds.clamp(Point::new(30.0, 4.0)), Point::new(5.0, 4.0));
    }

    #[test]
    fn clamp_scenarios() {
        let bounds = demo_bounds();
        assert_eq!(
            clamp(Point::new(250.0, 100.0), &bounds),
            Point::new(220.0, 100.0)
        );
        assert_eq!(clamp(Point::new(50.0, 50.0), &bounds), Point::new(50.0, 50.0));
        assert_eq!(clamp(Point::new(-20.0, 200.0), &bounds), Point::new(0.0, 150.0));
    }

    #[test]
    fn clamp_nan_goes_to_lower_bound() {
        let bounds = demo_bounds();
        assert_eq!(
            clamp(Point::new(f64::NAN, 500.0), &bounds),
            Point::new(0.0, 150.0)
        );
    }

    #[test]
    fn contains_includes_edges() {
        let bounds = demo_bounds();
        assert!(bounds.contains(Point::ORIGIN));
        assert!(bounds.contains(Point::new(220.0, 150.0)));
        assert!(!bounds.contains(Point::new(220.000_001, 150.0)));
        assert!(!bounds.contains(Point::new(10.0, -0.5)));
    }

    #[test]
    fn to_rect_spans_corners() {
        let rect = demo_bounds().to_rect();
        assert_eq!(rect, Rect::new(0.0, 0.0, 220.0, 150.0));
    }
}
