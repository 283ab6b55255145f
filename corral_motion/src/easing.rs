// Copyright 2026 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// No easing.
    Linear,
    /// Slow start: `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Slow end: `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Slow start and end: `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
    /// A CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// `x1` and `x2` are clamped into `[0, 1]` so the curve stays a function of
    /// time. `y` values may leave that range to produce anticipation or
    /// overshoot.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Applies the curve to `t`, which is clamped into `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, t)
            }
        }
    }
}

/// Polynomial coefficients of one bezier coordinate with endpoints 0 and 1.
#[derive(Clone, Copy)]
struct Axis {
    a: f64,
    b: f64,
    c: f64,
}

impl Axis {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn sample(self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn slope(self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let x_axis = Axis::new(x1, x2);
    let y_axis = Axis::new(y1, y2);

    // Newton first; it converges in a handful of steps for well-behaved curves.
    let mut s = t;
    for _ in 0..8 {
        let err = x_axis.sample(s) - t;
        if err.abs() < EPSILON {
            return y_axis.sample(s);
        }
        let slope = x_axis.slope(s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    // Flat spots: bisect. x(s) is monotonic on [0, 1] once x1/x2 are clamped.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    for _ in 0..64 {
        let x = x_axis.sample(s);
        if (x - t).abs() < EPSILON {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    y_axis.sample(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(7.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn standard_curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let y = easing.apply(f64::from(i) / 100.0);
                assert!(y >= last - 1e-9, "{easing:?} dipped at {i}");
                last = y;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        for i in 1..50 {
            let t = f64::from(i) / 100.0;
            let a = Easing::EaseInOut.apply(t);
            let b = Easing::EaseInOut.apply(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-5, "asymmetric at {t}");
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_in_starts_slow_and_ease_out_starts_fast() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
    }

    #[test]
    fn linear_control_points_reproduce_linear() {
        let curve = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((curve.apply(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn overshooting_curve_leaves_unit_range() {
        let back_out = Easing::CubicBezier(0.34, 1.56, 0.64, 1.0);
        let peak = (1..100)
            .map(|i| back_out.apply(f64::from(i) / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn nan_progress_is_start() {
        assert_eq!(Easing::EaseInOut.apply(f64::NAN), 0.0);
    }
}
