use std::fs;
use std::sync::Arc;

use histocheby::{ChebyshevApproximation, Error, Histogram};

/// A skewed, peaked distribution binned into `n_bins` f32 bins on [low, high).
fn skewed_histogram(low: f64, high: f64, n_bins: usize) -> Result<Histogram<f32>, Error> {
    let width = (high - low) / n_bins as f64;
    let contents = (0..n_bins)
        .map(|i| {
            let x = low + (i as f64 + 0.5) * width;
            let sigma = if x < 90.0 { 15.0 } else { 30.0 };
            let d = (x - 90.0) / sigma;
            (800.0 * (-0.5 * d * d).exp() + 20.0) as f32
        })
        .collect();
    Histogram::new(low, high, contents)
}

fn write_csv_columns(header: &[String], columns: &[Vec<f64>], csv_path: &str) -> std::io::Result<()> {
    let n_samples = columns[0].len();

    let mut csv_string = header.join(",");
    csv_string.push('\n');

    for row_idx in 0..n_samples {
        let row: Vec<String> = columns
            .iter()
            .map(|column| format!("\"{}\"", column[row_idx]))
            .collect();
        csv_string.push_str(row.join(",").as_str());
        csv_string.push('\n');
    }
    fs::write(csv_path, csv_string)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate csv files for plotting a histogram and its normalized
    // approximations with gnuplot
    let output_path = "plots/histogram_fits.csv";
    let (a, b) = (40.0, 160.0);
    let hist = Arc::new(skewed_histogram(0.0, 200.0, 100)?);

    let x_values: Vec<f64> = (0..hist.bin_count())
        .map(|i| hist.bin_center(i))
        .filter(|&x| a <= x && x <= b)
        .collect();

    let mut header = vec!["x".to_string(), "content".to_string()];
    let mut columns = vec![
        x_values.clone(),
        x_values.iter().map(|&x| hist.interpolate(x)).collect(),
    ];
    for degree in 4..=10 {
        let approx = ChebyshevApproximation::fit(hist.clone(), a, b, degree, true)?;
        header.push(format!("n{degree}"));
        columns.push(x_values.iter().map(|&x| approx.evaluate(x)).collect());
        println!("n = {degree}: c0 = {:.3}", approx.coefficients()[0]);
    }

    fs::create_dir_all("plots")?;
    write_csv_columns(&header, &columns, output_path)?;
    Ok(())
}
