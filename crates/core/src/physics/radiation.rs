//! Blackbody radiation
//!
//! Planck spectral radiance in frequency space,
//!
//! ```text
//! B(ν, T) = (2hν³/c²) / (exp(hν/kT) − 1)
//! ```
//!
//! in W/(m² sr Hz). The dimensionless argument hν/kT is capped before
//! exponentiation so the deep Wien tail underflows to zero instead of
//! overflowing to infinity.

use crate::core_types::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT};
use crate::error::{ClimateError, Result};

/// Largest hν/kT fed to `exp`; beyond this the radiance is zero anyway
const MAX_EXPONENT: f64 = 500.0;

/// Planck spectral radiance [W/(m² sr Hz)] at frequency `nu` [Hz] and
/// temperature `t` [K]
///
/// # Errors
/// `InvalidTemperature` if `t` is not positive.
pub fn planck_radiance(nu: f64, t: f64) -> Result<f64> {
    if t <= 0.0 {
        return Err(ClimateError::InvalidTemperature { kelvin: t });
    }
    let u = (PLANCK * nu / (BOLTZMANN * t)).min(MAX_EXPONENT);
    let prefactor = 2.0 * PLANCK * nu.powi(3) / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
    Ok(prefactor / (u.exp() - 1.0))
}
