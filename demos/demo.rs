use std::f64::consts::PI;
use std::sync::Arc;

use histocheby::{ChebyshevApproximation, Error};

fn sin_approx() -> Result<(), Error> {
    // Compute an 8 term approximation of sin(x) on the interval [0, π]
    let sin_approx = ChebyshevApproximation::fit(Arc::new(f64::sin), 0.0, PI, 8, false)?;
    println!("{sin_approx}");
    println!("{}", sin_approx.node_report());
    // Get the approximated value at x = π/2
    let value_approx = sin_approx.evaluate(0.5 * PI);
    // Compute the approximation error at x = π/2 and make sure it's small
    let error = 1.0 - value_approx;
    assert!(error.abs() < 1e-3);
    Ok(())
}

fn normalized_exp_approx() -> Result<(), Error> {
    // The same kind of approximation, with c0 as overall scale
    let exp_approx = ChebyshevApproximation::fit(Arc::new(f64::exp), -1.0, 1.0, 6, true)?;
    println!("{exp_approx}");
    let params = exp_approx.coefficients().to_vec();
    println!("exp(0.5) ~ {}", exp_approx.evaluate_with(0.5, &params)?);
    Ok(())
}

fn main() -> Result<(), Error> {
    sin_approx()?;
    normalized_exp_approx()
}
