//! Affine mapping between the canonical range [-1, 1] and the approximation interval [a, b].

use crate::error::{Error, Result};

/// Maps `x` in [a, b] to [-1, 1].
pub fn to_canonical(x: f64, a: f64, b: f64) -> f64 {
    (x - 0.5 * (a + b)) * 2.0 / (b - a)
}

/// Maps `t` in [-1, 1] to [a, b]. Inverse of [`to_canonical`].
pub fn to_interval(t: f64, a: f64, b: f64) -> f64 {
    0.5 * (b - a) * t + 0.5 * (a + b)
}

/// A validated approximation interval.
///
/// The bounds are finite and distinct, and neither `b - a` nor `a + b` overflows.
/// `a > b` is accepted, in which case the canonical range is traversed in reverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::NonFiniteBound { a, b });
        }
        if a == b {
            return Err(Error::EmptyInterval { a, b });
        }
        if !(b - a).is_finite() || !(a + b).is_finite() {
            return Err(Error::UnboundedWidth { a, b });
        }
        Ok(Interval { a, b })
    }

    /// The start of the interval.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The end of the interval.
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn to_canonical(&self, x: f64) -> f64 {
        to_canonical(x, self.a, self.b)
    }

    pub fn to_interval(&self, t: f64) -> f64 {
        to_interval(t, self.a, self.b)
    }

    /// Checks if `x` lies between the bounds, inclusive. Accuracy of an
    /// approximation is only meaningful for such values.
    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = if self.a < self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        lo <= x && x <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_endpoints_and_midpoint() {
        let (a, b) = (40.0, 160.0);
        assert_abs_diff_eq!(to_canonical(a, a, b), -1.0);
        assert_abs_diff_eq!(to_canonical(b, a, b), 1.0);
        assert_abs_diff_eq!(to_canonical(100.0, a, b), 0.0);
        assert_abs_diff_eq!(to_interval(-1.0, a, b), a);
        assert_abs_diff_eq!(to_interval(1.0, a, b), b);
    }

    #[test]
    fn test_round_trip() {
        let (a, b) = (-2.5, 7.25);
        for i in 0..=40 {
            let x = a + (b - a) * i as f64 / 40.0;
            assert_abs_diff_eq!(to_interval(to_canonical(x, a, b), a, b), x, epsilon = 1e-12);
            let t = -1.0 + i as f64 / 20.0;
            assert_abs_diff_eq!(to_canonical(to_interval(t, a, b), a, b), t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reversed_interval() {
        let interval = Interval::new(3.0, 1.0).unwrap();
        assert_abs_diff_eq!(interval.to_canonical(3.0), -1.0);
        assert_abs_diff_eq!(interval.to_canonical(1.0), 1.0);
        assert!(interval.contains(2.0));
        assert!(!interval.contains(0.5));
    }

    #[test]
    fn test_invalid_bounds() {
        assert_eq!(
            Interval::new(2.0, 2.0),
            Err(Error::EmptyInterval { a: 2.0, b: 2.0 })
        );
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(Error::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(Error::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_overflowing_width() {
        assert_eq!(
            Interval::new(-1e308, 1e308),
            Err(Error::UnboundedWidth { a: -1e308, b: 1e308 })
        );
        assert_eq!(
            Interval::new(f64::MAX, -f64::MAX),
            Err(Error::UnboundedWidth { a: f64::MAX, b: -f64::MAX })
        );
        assert_eq!(
            Interval::new(f64::MAX, 0.5 * f64::MAX),
            Err(Error::UnboundedWidth { a: f64::MAX, b: 0.5 * f64::MAX })
        );
        let wide = Interval::new(-1e307, 1e307).unwrap();
        assert_abs_diff_eq!(wide.to_canonical(1e307), 1.0);
    }
}
