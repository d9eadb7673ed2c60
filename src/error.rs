//! Errors returned when building approximations and histogram sources.

/// Failures detected while constructing a [`ChebyshevApproximation`](crate::ChebyshevApproximation)
/// or one of the sample sources it consumes.
///
/// Fitting is deterministic, so a failed construction fails the same way on every attempt.
/// The only remedy is different parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The approximation needs at least one coefficient.
    #[error("degree must be at least 1")]
    ZeroDegree,

    /// `a == b`, so there is nothing to map onto [-1, 1].
    #[error("approximation interval [{a}, {b}] has zero width")]
    EmptyInterval { a: f64, b: f64 },

    /// One of the interval bounds is NaN or infinite.
    #[error("approximation interval bounds must be finite, got [{a}, {b}]")]
    NonFiniteBound { a: f64, b: f64 },

    /// Both bounds are finite but `b - a` or `a + b` overflows.
    #[error("approximation interval [{a}, {b}] is too large to map onto [-1, 1]")]
    UnboundedWidth { a: f64, b: f64 },

    /// Normalization was requested but the fitted `c0` is zero or not finite, so the
    /// shape coefficients cannot be divided by it.
    #[error("cannot normalize coefficients: fitted c0 is zero or not finite")]
    DegenerateNormalization,

    /// A caller supplied coefficient vector has the wrong length.
    #[error("expected {expected} coefficients, got {actual}")]
    CoefficientCount { expected: usize, actual: usize },

    /// A histogram needs at least one bin.
    #[error("histogram has no bins")]
    EmptyHistogram,

    /// Histogram range is empty, reversed, not finite or too wide for a finite bin width.
    #[error("invalid histogram range [{low}, {high}]")]
    InvalidBinRange { low: f64, high: f64 },
}

impl Error {
    /// True for invalid fit parameters (degree or interval), false for
    /// failures that depend on the sampled data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::ZeroDegree
                | Error::EmptyInterval { .. }
                | Error::NonFiniteBound { .. }
                | Error::UnboundedWidth { .. }
        )
    }
}

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        assert!(Error::ZeroDegree.is_configuration());
        assert!(Error::EmptyInterval { a: 1.0, b: 1.0 }.is_configuration());
        assert!(Error::NonFiniteBound { a: f64::NAN, b: 1.0 }.is_configuration());
        assert!(Error::UnboundedWidth { a: -1e308, b: 1e308 }.is_configuration());
        assert!(!Error::DegenerateNormalization.is_configuration());
        assert!(!Error::EmptyHistogram.is_configuration());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_messages() {
        assert_eq!(Error::ZeroDegree.to_string(), "degree must be at least 1");
        assert_eq!(
            Error::CoefficientCount { expected: 3, actual: 2 }.to_string(),
            "expected 3 coefficients, got 2"
        );
    }
}
