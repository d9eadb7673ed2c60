use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::PI;

#[cfg(feature = "std")]
use core::fmt;

use crate::domain::Interval;
use crate::error::{Error, Result};
use crate::polynomial::ChebyshevTerms;
use crate::series::SeriesEvaluator;
use crate::source::SampleSource;

/// The `n` Chebyshev nodes _cos((k - 0.5) π / n)_, k = 1..n, on [-1, 1].
///
/// The nodes are strictly inside (-1, 1), in descending order.
///
/// # Arguments
/// * `n` - Number of nodes.
/// * `cos` - A function for computing _cos(x)_.
pub fn chebyshev_nodes<G>(n: usize, cos: G) -> impl Iterator<Item = f64>
where
    G: Fn(f64) -> f64,
{
    let n_inv = 1.0 / (n as f64);
    (1..=n).map(move |k| cos((k as f64 - 0.5) * n_inv * PI))
}

/// A degree `n` discrete Chebyshev approximation of a [`SampleSource`] on [a, b].
///
/// Holds `n` coefficients and a shared handle to the source it was fitted to.
/// Immutable once fitted. Cloning copies the coefficients and shares the source.
pub struct ChebyshevApproximation<S: ?Sized> {
    interval: Interval,
    /// Chebyshev coefficients. With [`SeriesEvaluator::Raw`] the first one has been
    /// multiplied by 0.5, with [`SeriesEvaluator::Normalized`] it is the overall scale.
    coeffs: Vec<f64>,
    evaluator: SeriesEvaluator,
    source: Arc<S>,
}

impl<S: ?Sized> Clone for ChebyshevApproximation<S> {
    fn clone(&self) -> Self {
        ChebyshevApproximation {
            interval: self.interval,
            coeffs: self.coeffs.clone(),
            evaluator: self.evaluator,
            source: Arc::clone(&self.source),
        }
    }
}

#[cfg(feature = "std")]
impl<S: ?Sized> fmt::Display for ChebyshevApproximation<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "ChebyshevApproximation {{")?;
        writeln!(fmt, "  a: {},", self.a())?;
        writeln!(fmt, "  b: {},", self.b())?;
        writeln!(fmt, "  degree: {},", self.degree())?;
        writeln!(fmt, "  evaluator: {:?},", self.evaluator)?;
        writeln!(fmt, "  coeffs: {:?}", self.coeffs)?;
        writeln!(fmt, "}}")?;
        Ok(())
    }
}

impl<S: ?Sized> core::fmt::Debug for ChebyshevApproximation<S> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        fmt.debug_struct("ChebyshevApproximation")
            .field("interval", &self.interval)
            .field("evaluator", &self.evaluator)
            .field("coeffs", &self.coeffs)
            .finish_non_exhaustive()
    }
}

impl<S> ChebyshevApproximation<S>
where
    S: SampleSource + ?Sized,
{
    /// Fits a degree `n` approximation of `source` on [a, b].
    ///
    /// # Arguments
    /// * `source` - The function to approximate. Shared, never mutated.
    /// * `a` - The start of the range to approximate.
    /// * `b` - The end of the range to approximate.
    /// * `n` - Number of coefficients and interpolation nodes.
    /// * `normalize` - Store `c_0` as an overall scale and the remaining coefficients relative to it.
    ///
    /// # Errors
    /// Fails with a configuration error if `n == 0` or `a == b`, and with
    /// [`Error::DegenerateNormalization`] if `normalize` is set and the fitted `c_0` is zero
    /// or not finite.
    #[cfg(feature = "std")]
    pub fn fit(source: Arc<S>, a: f64, b: f64, n: usize, normalize: bool) -> Result<Self> {
        ChebyshevApproximation::fit_with_options(source, a, b, n, normalize, |x: f64| x.cos())
    }

    /// Like [`ChebyshevApproximation::fit`], with a caller provided cosine.
    ///
    /// # Arguments
    /// * `source` - The function to approximate.
    /// * `a` - The start of the range to approximate.
    /// * `b` - The end of the range to approximate.
    /// * `n` - Number of coefficients and interpolation nodes.
    /// * `normalize` - Store `c_0` as an overall scale and the remaining coefficients relative to it.
    /// * `cos` - A function for computing _cos(x)_. Allows the caller to provide a
    /// custom cosine implementation if the standard one is not available, which is the case in `no_std` environments.
    pub fn fit_with_options<G>(
        source: Arc<S>,
        a: f64,
        b: f64,
        n: usize,
        normalize: bool,
        cos: G,
    ) -> Result<Self>
    where
        G: Fn(f64) -> f64,
    {
        if n == 0 {
            return Err(Error::ZeroDegree);
        }
        let interval = Interval::new(a, b)?;

        // c_j = 2/n * sum_k f(x_k) T_j(t_k), accumulated node by node
        let mut sums = alloc::vec![0.0; n];
        for t_k in chebyshev_nodes(n, cos) {
            let f_k = source.evaluate(interval.to_interval(t_k));
            for (sum, t_jk) in sums.iter_mut().zip(ChebyshevTerms::new(t_k)) {
                *sum += f_k * t_jk;
            }
        }
        let scale = 2.0 / (n as f64);
        let mut coeffs: Vec<f64> = sums.into_iter().map(|sum| sum * scale).collect();

        // "pre-baking" multiply by 0.5 so the raw series needs no special first term
        coeffs[0] *= 0.5;

        let evaluator = if normalize {
            let norm = coeffs[0];
            if norm == 0.0 || !norm.is_finite() {
                return Err(Error::DegenerateNormalization);
            }
            for c in coeffs.iter_mut().skip(1) {
                *c /= norm;
            }
            SeriesEvaluator::Normalized
        } else {
            SeriesEvaluator::Raw
        };

        Ok(ChebyshevApproximation {
            interval,
            coeffs,
            evaluator,
            source,
        })
    }

    /// Evaluates the fitted approximation at a given point.
    ///
    /// Defined for any finite `x`, but only accurate inside [a, b].
    ///
    /// # Arguments
    ///
    /// * `x` - Evaluate the approximation at this x value.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.evaluator
            .evaluate(x, &self.coeffs, self.interval.a(), self.interval.b())
    }

    /// Evaluates the series at `x` using caller supplied coefficients in place of
    /// the fitted ones, keeping this approximation's interval and evaluation policy.
    /// Useful when an external fitter varies the coefficients starting from [`Self::coefficients`].
    ///
    /// # Arguments
    ///
    /// * `x` - Evaluate the series at this x value.
    /// * `params` - Exactly `n` coefficients, interpreted like the fitted ones.
    pub fn evaluate_with(&self, x: f64, params: &[f64]) -> Result<f64> {
        if params.len() != self.coeffs.len() {
            return Err(Error::CoefficientCount {
                expected: self.coeffs.len(),
                actual: params.len(),
            });
        }
        Ok(self
            .evaluator
            .evaluate(x, params, self.interval.a(), self.interval.b()))
    }

    /// Evaluates the first `terms` coefficients of the approximation at a given point.
    /// `terms` larger than the degree evaluates the full series.
    ///
    /// # Arguments
    ///
    /// * `x` - Evaluate the approximation at this x value.
    /// * `terms` - Evaluate this many terms.
    pub fn evaluate_truncated(&self, x: f64, terms: usize) -> f64 {
        let terms = terms.min(self.coeffs.len());
        self.evaluator
            .evaluate(x, &self.coeffs[..terms], self.interval.a(), self.interval.b())
    }

    /// Re-evaluates the source and the approximation at every interpolation node.
    /// The two agree up to rounding for a successful fit.
    #[cfg(feature = "std")]
    pub fn node_report(&self) -> FitReport {
        let checks = chebyshev_nodes(self.degree(), |x: f64| x.cos())
            .map(|t| {
                let x = self.interval.to_interval(t);
                NodeCheck {
                    x,
                    sampled: self.source.evaluate(x),
                    approximated: self.evaluate(x),
                }
            })
            .collect();
        FitReport {
            degree: self.degree(),
            checks,
        }
    }
}

impl<S: ?Sized> ChebyshevApproximation<S> {
    /// The start of the approximation interval.
    pub fn a(&self) -> f64 {
        self.interval.a()
    }

    /// The end of the approximation interval.
    pub fn b(&self) -> f64 {
        self.interval.b()
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Number of coefficients, which is also the number of interpolation nodes.
    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    /// The fitted coefficients, interpreted according to [`Self::evaluator`].
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn evaluator(&self) -> SeriesEvaluator {
        self.evaluator
    }

    /// The source this approximation was fitted to.
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }
}

/// Source value and approximated value at one interpolation node.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeCheck {
    pub x: f64,
    pub sampled: f64,
    pub approximated: f64,
}

#[cfg(feature = "std")]
impl NodeCheck {
    pub fn residual(&self) -> f64 {
        self.approximated - self.sampled
    }
}

/// Node by node comparison of an approximation with its source, see
/// [`ChebyshevApproximation::node_report`].
#[cfg(feature = "std")]
#[derive(Clone, Debug, PartialEq)]
pub struct FitReport {
    degree: usize,
    checks: Vec<NodeCheck>,
}

#[cfg(feature = "std")]
impl FitReport {
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn checks(&self) -> &[NodeCheck] {
        &self.checks
    }

    /// Largest absolute residual over all nodes.
    pub fn max_residual(&self) -> f64 {
        self.checks
            .iter()
            .map(|check| check.residual().abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(feature = "std")]
impl fmt::Display for FitReport {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "degree {} approximation on nodes", self.degree)?;
        for check in &self.checks {
            writeln!(fmt, "{} {} {}", check.x, check.sampled, check.approximated)?;
        }
        Ok(())
    }
}
