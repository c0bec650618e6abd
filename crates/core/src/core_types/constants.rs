//! Basic physical constants (mks units)
//!
//! Values follow the 2018 CODATA recommendations. `RSTAR` is expressed in
//! J/(kmol K) so that dividing by a molecular weight in kg/kmol yields the
//! specific gas constant in J/(kg K).

/// Planck constant [J s]
pub const PLANCK: f64 = 6.62607015e-34;

/// Speed of light in vacuum [m/s]
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// Boltzmann constant [J/K]
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Stefan-Boltzmann constant [W/(m² K⁴)]
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Newtonian gravitational constant [m³/(kg s²)]
pub const GRAVITATION: f64 = 6.67430e-11;

/// Avogadro's number [1/mol]
pub const AVOGADRO: f64 = 6.02214076e23;

/// Universal gas constant [J/(kmol K)]
pub const RSTAR: f64 = 1000.0 * BOLTZMANN * AVOGADRO;
