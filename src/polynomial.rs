//! Chebyshev polynomials of the first kind.

/// Evaluates the Chebyshev polynomial of the first kind _T_degree(x)_ using the
/// three term recurrence _T_k(x) = 2x T_{k-1}(x) - T_{k-2}(x)_.
///
/// Only meaningful for `-1.0 <= x <= 1.0`, but finite for any finite `x`.
///
/// # Arguments
/// * `x` - Evaluate the polynomial at this value.
/// * `degree` - The polynomial degree.
pub fn chebyshev_t(x: f64, degree: usize) -> f64 {
    match degree {
        0 => 1.0,
        1 => x,
        _ => {
            let mut t_prev = 1.0;
            let mut t = x;
            for _ in 2..=degree {
                let t_next = 2.0 * x * t - t_prev;
                t_prev = t;
                t = t_next;
            }
            t
        }
    }
}

/// Infinite iterator over _T_0(x), T_1(x), T_2(x), ..._
///
/// Runs the same recurrence as [`chebyshev_t`] so every term is bit for bit
/// equal to the corresponding `chebyshev_t(x, k)`, but a whole series can be
/// walked in linear time.
#[derive(Clone, Debug)]
pub struct ChebyshevTerms {
    x: f64,
    prev: f64,
    current: f64,
    index: usize,
}

impl ChebyshevTerms {
    pub fn new(x: f64) -> Self {
        ChebyshevTerms {
            x,
            prev: 0.0,
            current: 0.0,
            index: 0,
        }
    }
}

impl Iterator for ChebyshevTerms {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = match self.index {
            0 => 1.0,
            1 => self.x,
            _ => 2.0 * self.x * self.current - self.prev,
        };
        self.prev = self.current;
        self.current = value;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
