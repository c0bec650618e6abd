//! Newton-Raphson root finding
//!
//! Solves f(x, params) = 0 from an initial guess, using either a supplied
//! derivative or a centered finite-difference approximation. A failure to
//! converge within the iteration cap is reported as a distinguishable
//! error value, never a panic, so the caller can retry with a different
//! guess. `scan` produces candidate guesses by walking an interval and
//! recording every sign change.
//!
//! Functions take an explicit parameter argument, `f(x, &params)`;
//! callers with nothing to pass supply `&()`.

use crate::error::{ClimateError, Result};

/// Newton's method solver for a function of one variable
#[derive(Debug, Clone, Copy)]
pub struct NewtonSolver {
    /// Increment for the centered-difference derivative approximation
    pub eps: f64,
    /// Iteration stops once the Newton step is smaller than this
    /// (an approximation to the error in the root)
    pub tolerance: f64,
    /// Maximum number of iterations before reporting failure
    pub max_iterations: usize,
}

impl Default for NewtonSolver {
    fn default() -> Self {
        NewtonSolver {
            eps: 1e-6,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl NewtonSolver {
    /// Solver with default settings (eps = 1e-6, tolerance = 1e-6, cap = 100)
    #[must_use]
    pub fn new() -> Self {
        NewtonSolver::default()
    }

    /// Find a root of `f` starting from `guess`, approximating the
    /// derivative by a centered finite difference of half-width `eps`
    ///
    /// # Errors
    /// `NoConvergence` if the step has not dropped below tolerance within
    /// `max_iterations`.
    pub fn solve<P, F>(&self, f: F, guess: f64, params: &P) -> Result<f64>
    where
        F: Fn(f64, &P) -> f64,
    {
        let deriv = |x: f64, p: &P| (f(x + self.eps, p) - f(x - self.eps, p)) / (2.0 * self.eps);
        self.iterate(&f, &deriv, guess, params)
    }

    /// Find a root of `f` using the caller-supplied derivative `fprime`
    ///
    /// # Errors
    /// `NoConvergence` if the step has not dropped below tolerance within
    /// `max_iterations`.
    pub fn solve_with_derivative<P, F, D>(
        &self,
        f: F,
        fprime: D,
        guess: f64,
        params: &P,
    ) -> Result<f64>
    where
        F: Fn(f64, &P) -> f64,
        D: Fn(f64, &P) -> f64,
    {
        self.iterate(&f, &fprime, guess, params)
    }

    fn iterate<P>(
        &self,
        f: &dyn Fn(f64, &P) -> f64,
        fprime: &dyn Fn(f64, &P) -> f64,
        guess: f64,
        params: &P,
    ) -> Result<f64> {
        let mut x = guess;
        for _ in 0..self.max_iterations {
            let dx = f(x, params) / fprime(x, params);
            x -= dx;
            if dx.abs() < self.tolerance {
                return Ok(x);
            }
        }
        Err(ClimateError::NoConvergence {
            iterations: self.max_iterations,
        })
    }

    /// Scan `interval` in `n` steps and return every x where f changes
    /// sign against the previous sample, as candidate initial guesses
    ///
    /// The larger `n`, the smaller the chance a root is missed, at the
    /// cost of more function evaluations. A typical starting value is 10.
    pub fn scan<P, F>(&self, f: F, params: &P, interval: (f64, f64), n: usize) -> Vec<f64>
    where
        F: Fn(f64, &P) -> f64,
    {
        let mut guesses = Vec::new();
        if n < 2 {
            return guesses;
        }
        let dx = (interval.1 - interval.0) / (n as f64 - 1.0);
        let mut flast = f(interval.0, params);
        for i in 1..n {
            let x = interval.0 + i as f64 * dx;
            let fnow = f(x, params);
            if (fnow >= 0.0 && flast <= 0.0) || (fnow <= 0.0 && flast >= 0.0) {
                guesses.push(x);
            }
            flast = fnow;
        }
        guesses
    }
}
