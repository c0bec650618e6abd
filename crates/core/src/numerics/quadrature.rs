//! Adaptive quadrature by Romberg extrapolation
//!
//! `TrapezoidRule` carries out trapezoidal integration with iterative
//! refinement: each `refine` call doubles the number of subintervals while
//! reusing every previously computed function value, so only the new
//! midpoints are evaluated. `Romberg` drives the refinement and
//! extrapolates the sequence of trapezoid sums to zero step size
//! (polynomial extrapolation in h², via [`polint`]), stopping when two
//! successive extrapolants agree to within the requested tolerance.
//!
//! Integrands take an explicit parameter argument, `f(x, &params)`.
//! Callers with nothing to pass supply `&()`.

use crate::error::{ClimateError, Result};
use crate::numerics::interpolation::polint;

/// Trapezoidal-rule integrator with midpoint refinement
pub struct TrapezoidRule<'a, P, F>
where
    F: Fn(f64, &P) -> f64,
{
    f: &'a F,
    params: &'a P,
    a: f64,
    b: f64,
    n: usize,
    integral: f64,
}

impl<'a, P, F> TrapezoidRule<'a, P, F>
where
    F: Fn(f64, &P) -> f64,
{
    /// Coarse trapezoid sum over `nstart` subintervals of `[a, b]`
    pub fn new(f: &'a F, params: &'a P, interval: (f64, f64), nstart: usize) -> Self {
        let (a, b) = interval;
        let dx = (b - a) / nstart as f64;
        let mut sum = dx * (f(a, params) + f(b, params)) / 2.0;
        for i in 1..nstart {
            let x = a + i as f64 * dx;
            sum += f(x, params) * dx;
        }
        TrapezoidRule {
            f,
            params,
            a,
            b,
            n: nstart,
            integral: sum,
        }
    }

    /// Halve the step size, reusing all previous function values
    ///
    /// Adds the function evaluated at the midpoint of every existing
    /// subinterval; the old sum contributes half its value because the new
    /// dx is half the old one.
    pub fn refine(&mut self) {
        let dx = (self.b - self.a) / self.n as f64;
        let mut sum = 0.0;
        for i in 0..self.n {
            let x = self.a + (i as f64 + 0.5) * dx;
            sum += (self.f)(x, self.params) * (dx / 2.0);
        }
        self.integral = 0.5 * self.integral + sum;
        self.n *= 2;
    }

    /// Current trapezoid estimate
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Current number of subintervals
    #[must_use]
    pub fn subintervals(&self) -> usize {
        self.n
    }
}

/// Romberg quadrature driver
#[derive(Debug, Clone, Copy)]
pub struct Romberg {
    /// Subintervals for the initial trapezoid sum
    pub nstart: usize,
    /// Absolute agreement required between successive extrapolants
    pub tolerance: f64,
}

impl Default for Romberg {
    fn default() -> Self {
        Romberg {
            nstart: 4,
            tolerance: 1e-6,
        }
    }
}

impl Romberg {
    /// Refinement cap; the trapezoid cost doubles each round, so hitting
    /// this means the integrand is noisy or the tolerance unreachable
    const MAX_REFINEMENTS: usize = 24;

    /// Driver with default settings (nstart = 4, tolerance = 1e-6)
    #[must_use]
    pub fn new() -> Self {
        Romberg::default()
    }

    /// Same driver with a different convergence tolerance
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Integrate `f(x, params)` over `interval`
    ///
    /// # Errors
    /// `NoConvergence` if successive extrapolants still disagree after the
    /// refinement cap.
    pub fn integrate<P, F>(&self, f: F, params: &P, interval: (f64, f64)) -> Result<f64>
    where
        F: Fn(f64, &P) -> f64,
    {
        let mut trap = TrapezoidRule::new(&f, params, interval, self.nstart);

        // Extrapolate the estimates to zero step size in powers of h²
        let mut h_squared = vec![Self::inverse_n_squared(trap.subintervals())];
        let mut estimates = vec![trap.integral()];
        let mut oldval: Option<f64> = None;

        for _ in 0..Self::MAX_REFINEMENTS {
            trap.refine();
            h_squared.push(Self::inverse_n_squared(trap.subintervals()));
            estimates.push(trap.integral());
            let newval = polint(&h_squared, &estimates, 0.0)?;
            if let Some(old) = oldval {
                if (old - newval).abs() <= self.tolerance {
                    return Ok(newval);
                }
            }
            oldval = Some(newval);
        }

        Err(ClimateError::NoConvergence {
            iterations: Self::MAX_REFINEMENTS,
        })
    }

    fn inverse_n_squared(n: usize) -> f64 {
        1.0 / (n as f64 * n as f64)
    }
}
