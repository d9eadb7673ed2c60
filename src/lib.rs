#![cfg_attr(not(feature = "std"), no_std)]

//! histocheby computes discrete [Chebyshev](https://en.wikipedia.org/wiki/Chebyshev_polynomials)
//! approximations of sampled functions of one variable, typically histograms, and evaluates
//! them quickly afterwards. The fitted coefficients can be kept as they are or normalized
//! so that the first coefficient carries the overall scale and the others describe the shape,
//! which is convenient when the coefficients are handed to an external fitter.
//!
//! The crate is `no_std` compatible but needs `alloc`.
//!
//! # Installing
//!
//! Add the following line to your Cargo.toml file:
//!
//! ```text
//! histocheby = "0.1"
//! ```
//!
//! To use histocheby in a `no_std` environment:
//!
//! ```text
//! histocheby = { version = "0.1", default-features = false }
//! ```
//!
//! # Chebyshev approximation
//!
//! A degree _n_ approximation of _f_ on [a, b] samples _f_ at the _n_ Chebyshev nodes
//! _x_k_ (the zeros of _T_n_ mapped onto [a, b]) and computes
//!
//! ```text
//! c_j = 2/n * sum_k f(x_k) T_j(t_k),   j = 0..n-1
//! ```
//!
//! The resulting series interpolates _f_ at the nodes. Accuracy is only meaningful inside [a, b].
//! For a more detailed introduction, see [5.8 Chebyshev Approximation](http://www.ff.bg.ac.rs/Katedre/Nuklearna/SiteNuklearna/bookcpdf/c5-8.pdf) in Numerical Recipes in C: The Art of Scientific Computing.
//!
//! # Basic usage
//!
//! ```
//! use std::f64::consts::PI;
//! use std::sync::Arc;
//! use histocheby::ChebyshevApproximation;
//!
//! // Compute an 8 term approximation of sin(x) on [0, π]
//! let sin_approx = ChebyshevApproximation::fit(Arc::new(f64::sin), 0.0, PI, 8, false)?;
//! let error = sin_approx.evaluate(0.5 * PI) - 1.0;
//! assert!(error.abs() < 1e-3);
//! # Ok::<(), histocheby::Error>(())
//! ```
//!
//! # Histograms and normalized coefficients
//!
//! ```
//! use std::sync::Arc;
//! use histocheby::{ChebyshevApproximation, Histogram, SeriesEvaluator};
//!
//! let contents: Vec<f32> = (0..12).map(|i| 10.0 + i as f32).collect();
//! let hist = Arc::new(Histogram::new(0.0, 12.0, contents)?);
//!
//! let approx = ChebyshevApproximation::fit(hist.clone(), 0.5, 11.5, 4, true)?;
//! assert_eq!(approx.evaluator(), SeriesEvaluator::Normalized);
//!
//! // c0 is the overall scale, the rest are relative to it
//! let coeffs = approx.coefficients();
//! assert!((coeffs[0] - 15.5).abs() < 1e-9);
//! assert!((approx.evaluate(6.0) - hist.interpolate(6.0)).abs() < 1e-9);
//!
//! // copies share the histogram
//! let copy = approx.clone();
//! assert!(Arc::ptr_eq(copy.source(), &hist));
//! # Ok::<(), histocheby::Error>(())
//! ```
//!
//! # Checking a fit
//!
//! The source and the approximation agree at every interpolation node, which can be
//! checked with a node report.
//!
//! ```
//! use std::sync::Arc;
//! use histocheby::ChebyshevApproximation;
//!
//! let approx = ChebyshevApproximation::fit(Arc::new(|x: f64| x.sqrt()), 0.1, 1.0, 6, false)?;
//! let report = approx.node_report();
//! println!("{report}");
//! assert!(report.max_residual() < 1e-12);
//! # Ok::<(), histocheby::Error>(())
//! ```
//!
//! # Errors
//!
//! ```
//! use std::sync::Arc;
//! use histocheby::{ChebyshevApproximation, Error};
//!
//! let err = ChebyshevApproximation::fit(Arc::new(|x: f64| x), 1.0, 1.0, 4, false).unwrap_err();
//! assert!(err.is_configuration());
//!
//! let err = ChebyshevApproximation::fit(Arc::new(|_: f64| 0.0), 0.0, 1.0, 4, true).unwrap_err();
//! assert_eq!(err, Error::DegenerateNormalization);
//! ```

extern crate alloc;

pub mod approximation;
pub mod domain;
pub mod error;
pub mod polynomial;
pub mod series;
pub mod source;

pub use approximation::{chebyshev_nodes, ChebyshevApproximation};
#[cfg(feature = "std")]
pub use approximation::{FitReport, NodeCheck};
pub use domain::{to_canonical, to_interval, Interval};
pub use error::{Error, Result};
pub use polynomial::{chebyshev_t, ChebyshevTerms};
pub use series::SeriesEvaluator;
pub use source::{Histogram, SampleSource};
