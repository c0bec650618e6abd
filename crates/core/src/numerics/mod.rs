//! Numerical building blocks: polynomial interpolation, Romberg
//! quadrature and Newton root finding

pub mod interpolation;
pub mod quadrature;
pub mod root_finding;

pub use interpolation::{polint, Interp};
pub use quadrature::Romberg;
pub use root_finding::NewtonSolver;
