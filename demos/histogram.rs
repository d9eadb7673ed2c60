use std::sync::Arc;

use histocheby::{ChebyshevApproximation, Error, Histogram};

/// Bin contents of a peaked distribution, stored as f32 like a filled histogram.
fn peaked_contents(low: f64, high: f64, n_bins: usize, peak: f64) -> Vec<f32> {
    let width = (high - low) / n_bins as f64;
    (0..n_bins)
        .map(|i| {
            let x = low + (i as f64 + 0.5) * width;
            let d = (x - peak) / 20.0;
            (1000.0 * (-0.5 * d * d).exp() + 50.0) as f32
        })
        .collect()
}

fn main() -> Result<(), Error> {
    let (low, high) = (0.0, 200.0);
    let (a, b) = (40.0, 160.0);
    let n = 9;

    for peak in [88.0, 90.0, 92.0] {
        let hist = Arc::new(Histogram::new(low, high, peaked_contents(low, high, 100, peak))?);
        let approx = ChebyshevApproximation::fit(hist, a, b, n, true)?;
        let coeffs: Vec<String> = approx
            .coefficients()
            .iter()
            .map(|c| format!("{c:8.4}"))
            .collect();
        println!("peak {peak:5.1}: {}", coeffs.join(" "));
        println!(
            "  max residual on nodes: {:e}",
            approx.node_report().max_residual()
        );
    }
    Ok(())
}
