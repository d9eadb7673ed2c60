//! Evaluation of a fitted coefficient array at a point in [a, b].

use crate::domain::to_canonical;
use crate::polynomial::ChebyshevTerms;

/// How a coefficient array is interpreted when evaluating a Chebyshev series.
/// Chosen when an approximation is fitted and fixed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesEvaluator {
    /// _c_0 + c_1 T_1(t) + ... + c_{n-1} T_{n-1}(t)_, where `c_0` already carries the
    /// factor 0.5 of the discrete fit.
    Raw,
    /// _c_0 (1 + c_1 T_1(t) + ... + c_{n-1} T_{n-1}(t))_, where `c_0` is the overall
    /// scale and the remaining coefficients are relative to it.
    Normalized,
}

impl SeriesEvaluator {
    /// Evaluates the series given by `coeffs` at `x`, mapping [a, b] onto [-1, 1] first.
    /// The number of terms is `coeffs.len()`; an empty array evaluates to zero.
    ///
    /// # Arguments
    ///
    /// * `x` - Evaluate the series at this x value.
    /// * `coeffs` - Chebyshev coefficients, lowest order first.
    /// * `a` - The start of the approximation interval.
    /// * `b` - The end of the approximation interval.
    pub fn evaluate(&self, x: f64, coeffs: &[f64], a: f64, b: f64) -> f64 {
        let terms = ChebyshevTerms::new(to_canonical(x, a, b));
        match self {
            SeriesEvaluator::Raw => coeffs
                .iter()
                .zip(terms)
                .fold(0.0, |value, (c_j, t_j)| value + c_j * t_j),
            SeriesEvaluator::Normalized => match coeffs.split_first() {
                Some((scale, shape)) => {
                    let relative = shape
                        .iter()
                        .zip(terms.skip(1))
                        .fold(1.0, |value, (c_j, t_j)| value + c_j * t_j);
                    scale * relative
                }
                None => 0.0,
            },
        }
    }
}
