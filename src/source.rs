//! Sources of the function values an approximation is fitted to.

use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Something that can be evaluated at an abscissa, such as tabulated data
/// interpolated between bins or a plain function.
///
/// Implementations must be deterministic and free of observable side effects.
/// A fitted approximation keeps a shared handle to its source and may be read
/// from several threads, so sources that are `Sync` make the approximation `Sync`.
pub trait SampleSource {
    /// The value of the source function at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> SampleSource for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A one dimensional histogram with uniform bins on `[low, high)`.
///
/// Bin contents can be stored as `f64` or `f32`, the two sampled
/// representations used with this crate, and are widened to `f64` when read.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram<T> {
    low: f64,
    high: f64,
    contents: Vec<T>,
}

impl<T> Histogram<T>
where
    T: Copy + Into<f64>,
{
    /// Creates a histogram from bin contents, ordered from `low` to `high`.
    ///
    /// # Arguments
    /// * `low` - Lower edge of the first bin.
    /// * `high` - Upper edge of the last bin.
    /// * `contents` - One value per bin.
    pub fn new(low: f64, high: f64, contents: Vec<T>) -> Result<Self> {
        if contents.is_empty() {
            return Err(Error::EmptyHistogram);
        }
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(Error::InvalidBinRange { low, high });
        }
        Ok(Histogram {
            low,
            high,
            contents,
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contents(&self) -> &[T] {
        &self.contents
    }

    pub fn bin_count(&self) -> usize {
        self.contents.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.contents.len() as f64
    }

    /// Center of bin `i` (zero based). Not bounds checked, so bins past either
    /// end continue the regular grid.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.low + (i as f64 + 0.5) * self.bin_width()
    }

    pub fn bin_content(&self, i: usize) -> Option<f64> {
        self.contents.get(i).map(|&c| c.into())
    }

    /// The bin containing `x`, or `None` if `x` is outside `[low, high)`.
    pub fn find_bin(&self, x: f64) -> Option<usize> {
        if !(self.low <= x && x < self.high) {
            return None;
        }
        let i = ((x - self.low) / self.bin_width()) as usize;
        Some(i.min(self.contents.len() - 1))
    }

    /// Linear interpolation between the two bin centers surrounding `x`.
    ///
    /// Below the first bin center the first bin content is returned, above the
    /// last bin center the last bin content. NaN in gives NaN out.
    pub fn interpolate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let last = self.contents.len() - 1;
        if x <= self.bin_center(0) {
            return self.contents[0].into();
        }
        if x >= self.bin_center(last) {
            return self.contents[last].into();
        }

        // Position in units of bins, measured from the first center. Positive here.
        let pos = (x - self.low) / self.bin_width() - 0.5;
        let lower = (pos as usize).min(last - 1);
        let (x_low, x_up) = (self.bin_center(lower), self.bin_center(lower + 1));
        let y_low: f64 = self.contents[lower].into();
        let y_up: f64 = self.contents[lower + 1].into();
        y_low + (y_up - y_low) * (x - x_low) / (x_up - x_low)
    }
}

impl<T> SampleSource for Histogram<T>
where
    T: Copy + Into<f64>,
{
    fn evaluate(&self, x: f64) -> f64 {
        self.interpolate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_closure_source() {
        let f = |x: f64| 3.0 * x + 1.0;
        assert_eq!(f.evaluate(2.0), 7.0);
    }

    #[test]
    fn test_bin_geometry() {
        let hist = Histogram::new(0.0, 10.0, vec![1.0_f64; 5]).unwrap();
        assert_eq!(hist.bin_count(), 5);
        assert_abs_diff_eq!(hist.bin_width(), 2.0);
        assert_abs_diff_eq!(hist.bin_center(0), 1.0);
        assert_abs_diff_eq!(hist.bin_center(4), 9.0);
        assert_eq!(hist.find_bin(0.0), Some(0));
        assert_eq!(hist.find_bin(3.9), Some(1));
        assert_eq!(hist.find_bin(9.999), Some(4));
        assert_eq!(hist.find_bin(10.0), None);
        assert_eq!(hist.find_bin(-0.1), None);
        assert_eq!(hist.bin_content(5), None);
    }

    #[test]
    fn test_interpolation_between_centers() {
        let hist = Histogram::new(0.0, 4.0, vec![1.0_f64, 3.0, 2.0, 6.0]).unwrap();
        // centers at 0.5, 1.5, 2.5, 3.5
        assert_abs_diff_eq!(hist.interpolate(1.5), 3.0);
        assert_abs_diff_eq!(hist.interpolate(1.0), 2.0);
        assert_abs_diff_eq!(hist.interpolate(2.0), 2.5);
        assert_abs_diff_eq!(hist.interpolate(3.25), 5.0);
    }

    #[test]
    fn test_interpolation_clamps_outside_centers() {
        let hist = Histogram::new(0.0, 4.0, vec![1.0_f64, 3.0, 2.0, 6.0]).unwrap();
        assert_abs_diff_eq!(hist.interpolate(0.1), 1.0);
        assert_abs_diff_eq!(hist.interpolate(-5.0), 1.0);
        assert_abs_diff_eq!(hist.interpolate(3.9), 6.0);
        assert_abs_diff_eq!(hist.interpolate(40.0), 6.0);
    }

    #[test]
    fn test_single_bin() {
        let hist = Histogram::new(-1.0, 1.0, vec![4.5_f64]).unwrap();
        assert_abs_diff_eq!(hist.interpolate(-0.7), 4.5);
        assert_abs_diff_eq!(hist.interpolate(0.7), 4.5);
    }

    #[test]
    fn test_nan_abscissa() {
        let single = Histogram::new(0.0, 1.0, vec![2.0_f64]).unwrap();
        assert!(single.interpolate(f64::NAN).is_nan());
        let several = Histogram::new(0.0, 3.0, vec![1.0_f32, 2.0, 3.0]).unwrap();
        assert!(several.evaluate(f64::NAN).is_nan());
        assert_eq!(several.find_bin(f64::NAN), None);
    }

    #[test]
    fn test_f32_contents() {
        let hist = Histogram::new(0.0, 2.0, vec![1.0_f32, 2.0]).unwrap();
        assert_abs_diff_eq!(hist.evaluate(1.0), 1.5);
        assert_eq!(hist.bin_content(1), Some(2.0));
    }

    #[test]
    fn test_invalid_histograms() {
        assert_eq!(
            Histogram::<f64>::new(0.0, 1.0, vec![]),
            Err(Error::EmptyHistogram)
        );
        assert_eq!(
            Histogram::new(1.0, 1.0, vec![1.0_f64]),
            Err(Error::InvalidBinRange { low: 1.0, high: 1.0 })
        );
        assert!(Histogram::new(2.0, 1.0, vec![1.0_f64]).is_err());
        assert!(Histogram::new(0.0, f64::NAN, vec![1.0_f64]).is_err());
        assert_eq!(
            Histogram::new(-1e308, 1e308, vec![1.0_f64]),
            Err(Error::InvalidBinRange { low: -1e308, high: 1e308 })
        );
    }
}
