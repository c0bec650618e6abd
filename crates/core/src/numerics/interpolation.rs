//! Polynomial interpolation and extrapolation
//!
//! `polint` is Neville's algorithm, adapted from Numerical Recipes. It is
//! the extrapolation engine behind the Romberg quadrature, and general
//! enough for polynomial fits to tabulated data. `Interp` wraps it with a
//! nearest-neighbor window so large tables can be interpolated locally.
//!
//! There is deliberately no bounds check on the query point: extrapolation
//! outside the table range is permitted and degrades gracefully in
//! accuracy rather than failing.

use crate::error::{ClimateError, Result};
use serde::{Deserialize, Serialize};

/// Polynomial interpolation at `x` through the points `(xa[i], ya[i])`
///
/// Returns the value at `x` of the unique polynomial of degree
/// `xa.len() - 1` passing through every tabulated point, evaluated with
/// Neville's algorithm.
///
/// # Errors
/// `LengthMismatch` if the slices differ in length or are empty.
pub fn polint(xa: &[f64], ya: &[f64], x: f64) -> Result<f64> {
    let n = xa.len();
    if n == 0 || n != ya.len() {
        return Err(ClimateError::LengthMismatch {
            left: n,
            right: ya.len(),
        });
    }

    let mut c = ya.to_vec();
    let mut d = ya.to_vec();

    // Find the closest table entry to seed the tableau walk
    let mut ns = 0;
    let mut diff = (xa[0] - x).abs();
    for (i, &xi) in xa.iter().enumerate() {
        let difft = (xi - x).abs();
        if difft < diff {
            diff = difft;
            ns = i;
        }
    }

    let mut y = ya[ns];
    for m in 1..n {
        for i in 0..(n - m) {
            let ho = xa[i] - x;
            let hp = xa[i + m] - x;
            let w = c[i + 1] - d[i];
            // ho - hp vanishes only if two table x-values coincide
            let den = ho - hp;
            c[i] = ho * w / den;
            d[i] = hp * w / den;
        }
        // Walk the side of the tableau that keeps the correction centered.
        // ns == 0 always takes the c branch, so the decrement cannot underflow.
        let dy = if 2 * ns < n - m {
            c[ns]
        } else {
            ns -= 1;
            d[ns]
        };
        y += dy;
        // dy would serve as an error estimate; only y is returned here
    }

    Ok(y)
}

/// Windowed polynomial interpolator over a tabulated function
///
/// Owns a copy of the table. For each query it locates the nearest table
/// index by binary search (ascending and descending tables both work) and
/// fits a polynomial through the `2n` surrounding points, `n = 4` by
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interp {
    xa: Vec<f64>,
    ya: Vec<f64>,
    n: usize,
}

impl Interp {
    /// Default number of neighbors taken on each side of the query point
    pub const DEFAULT_WINDOW: usize = 4;

    /// Build an interpolator with the default window (4 neighbors per side)
    ///
    /// # Errors
    /// `LengthMismatch` if the tables differ in length or are empty.
    pub fn new(xa: Vec<f64>, ya: Vec<f64>) -> Result<Self> {
        Self::with_window(xa, ya, Self::DEFAULT_WINDOW)
    }

    /// Build an interpolator using `n` neighbors on each side of the query
    ///
    /// # Errors
    /// `LengthMismatch` if the tables differ in length or are empty.
    pub fn with_window(xa: Vec<f64>, ya: Vec<f64>, n: usize) -> Result<Self> {
        if xa.is_empty() || xa.len() != ya.len() {
            return Err(ClimateError::LengthMismatch {
                left: xa.len(),
                right: ya.len(),
            });
        }
        Ok(Interp { xa, ya, n })
    }

    /// Interpolate (or extrapolate) the table at `x`
    ///
    /// # Errors
    /// Propagates `LengthMismatch` from the underlying fit; cannot occur
    /// for a successfully constructed interpolator.
    pub fn eval(&self, x: f64) -> Result<f64> {
        let len = self.xa.len();
        // Insertion index for x, handling both table orientations
        let i = if self.xa[0] < self.xa[len - 1] {
            self.xa.partition_point(|&v| v < x)
        } else {
            self.xa.partition_point(|&v| v > x)
        };

        let i1 = i.saturating_sub(self.n);
        let i2 = (i + self.n).min(len);

        polint(&self.xa[i1..i2], &self.ya[i1..i2], x)
    }

    /// Number of points in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.xa.len()
    }

    /// Whether the table is empty (never true for a constructed value)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xa.is_empty()
    }
}
