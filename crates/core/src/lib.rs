//! Planetary Climate Core Library
//!
//! Physics and numerics for planetary atmosphere calculations: saturation
//! vapor pressure (Clausius-Clapeyron and empirical water formulas),
//! moist adiabatic temperature profiles, blackbody radiation, and the
//! supporting numerical toolkit (polynomial interpolation, Romberg
//! quadrature, Newton root finding). Ships thermodynamic property tables
//! for common atmospheric gases and orbital/bulk data for solar system
//! bodies.

// Core types and constants
pub mod core_types;

// Errors shared across the crate
pub mod error;

// Numerical building blocks
pub mod numerics;

// Physical process models
pub mod physics;

// Re-export core types
pub use core_types::{Celsius, Kelvin, Pascals};
pub use core_types::{BodyClass, GasProperties, GasTable, Planet, PlanetTable};

// Re-export error types
pub use error::{ClimateError, Result};

// Re-export numerics
pub use numerics::{polint, Interp, NewtonSolver, Romberg};

// Re-export physics
pub use physics::{
    planck_radiance, water_vapor_pressure, AdiabatProfile, MoistAdiabat, Phase,
    SaturationVaporPressure, WaterVaporMode,
};
