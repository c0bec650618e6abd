//! Moist adiabat for a condensible/noncondensible gas mixture
//!
//! Integrates the saturated-adiabatic lapse rate
//!
//! ```text
//! d(ln T)     Ra · (1 + L·qsat/(Ra·T))
//! ─────── = ──────────────────────────────────────,  qsat = ε·e_sat(T)/pa
//! d(ln pa)   cpa + (cpc + (L/(Rc·T) − 1)·(L/T))·qsat
//! ```
//!
//! from the surface upward, where `pa` is the noncondensible partial
//! pressure and `e_sat` the Clausius-Clapeyron saturation pressure of the
//! condensible. As qsat → 0 the relation reduces to the dry adiabat
//! R/cp. The integration runs in log-pressure/log-temperature coordinates,
//! which keeps the state strictly positive and conditions the equation
//! well near the surface.
//!
//! The thermodynamic constants (ε, L, Ra, Rc, cpa, cpc) are fixed when the
//! integrator is built and never recomputed, so one instance can produce
//! any number of profiles for different surface conditions.

use crate::core_types::gas::GasProperties;
use crate::error::{ClimateError, Result};
use crate::numerics::interpolation::Interp;
use crate::physics::satvp::{Phase, SaturationVaporPressure};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default top-of-atmosphere pressure [Pa] at which integration stops
const DEFAULT_TOP_PRESSURE: f64 = 100.0;

/// Default step in ln(pa); negative because pressure decreases upward
const DEFAULT_LOG_PRESSURE_STEP: f64 = -0.05;

/// Atmospheric profile along a moist adiabat
///
/// Four equal-length sequences ordered from the surface (index 0) to the
/// top of the atmosphere, monotonically decreasing in pressure. Pressure
/// is the total (noncondensible plus condensible partial pressure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdiabatProfile {
    /// Total pressure [Pa]
    pub pressure: Vec<f64>,
    /// Temperature [K]
    pub temperature: Vec<f64>,
    /// Molar concentration of the condensible (mole fraction)
    pub molar_concentration: Vec<f64>,
    /// Mass-specific concentration of the condensible
    pub mass_concentration: Vec<f64>,
}

impl AdiabatProfile {
    /// Number of levels in the profile
    #[must_use]
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Whether the profile has no levels (never true for a returned value)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }
}

/// Moist adiabat integrator for a (condensible, noncondensible) gas pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistAdiabat {
    condensible: GasProperties,
    noncondensible: GasProperties,
    satvp: SaturationVaporPressure,
    /// Molecular weight ratio ε = Mc/Mnc
    eps: f64,
    /// Latent heat of vaporization of the condensible [J/kg]
    l: f64,
    /// Specific gas constant of the noncondensible [J/(kg K)]
    ra: f64,
    /// Specific gas constant of the condensible [J/(kg K)]
    rc: f64,
    /// Specific heat of the noncondensible [J/(kg K)]
    cpa: f64,
    /// Specific heat of the condensible [J/(kg K)]
    cpc: f64,
    top_pressure: f64,
    log_pressure_step: f64,
}

impl MoistAdiabat {
    /// Build an integrator for `condensible` mixed into `noncondensible`
    ///
    /// The owned saturation-vapor-pressure closure uses the condensible's
    /// own triple point to switch latent heats.
    ///
    /// # Errors
    /// `MissingProperty` if either record lacks a field the thermodynamic
    /// setup needs (e.g. a condensible with no latent heat data).
    pub fn new(condensible: GasProperties, noncondensible: GasProperties) -> Result<Self> {
        let satvp = SaturationVaporPressure::from_gas(&condensible, Phase::SwitchOnTriplePoint)?;
        let l = condensible.require_l_vaporization()?;
        let eps = condensible.molecular_weight / noncondensible.molecular_weight;
        let ra = noncondensible.gas_constant();
        let rc = condensible.gas_constant();
        let cpa = noncondensible.cp;
        let cpc = condensible.cp;
        Ok(MoistAdiabat {
            condensible,
            noncondensible,
            satvp,
            eps,
            l,
            ra,
            rc,
            cpa,
            cpc,
            top_pressure: DEFAULT_TOP_PRESSURE,
            log_pressure_step: DEFAULT_LOG_PRESSURE_STEP,
        })
    }

    /// Water vapor condensing in modern Earth air
    ///
    /// # Errors
    /// Cannot fail for the stock records; the `Result` mirrors [`new`](Self::new).
    pub fn earth() -> Result<Self> {
        MoistAdiabat::new(GasProperties::water(), GasProperties::earth_air())
    }

    /// Override the top-of-atmosphere pressure [Pa] (default 100 Pa)
    #[must_use]
    pub fn with_top_pressure(mut self, pascals: f64) -> Self {
        self.top_pressure = pascals;
        self
    }

    /// Override the magnitude of the ln(pa) integration step (default 0.05)
    #[must_use]
    pub fn with_log_pressure_step(mut self, step: f64) -> Self {
        // Stored negative; integration always proceeds to lower pressure
        self.log_pressure_step = -step.abs();
        self
    }

    /// Molecular weight ratio ε = Mc/Mnc
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.eps
    }

    /// Latent heat of vaporization of the condensible [J/kg]
    #[must_use]
    pub fn latent_heat(&self) -> f64 {
        self.l
    }

    /// Top-of-atmosphere pressure [Pa]
    #[must_use]
    pub fn top_pressure(&self) -> f64 {
        self.top_pressure
    }

    /// Saturated-adiabatic slope d(ln T)/d(ln pa) at the given state
    ///
    /// The denominator can approach zero or go negative for physically
    /// extreme surface conditions; the resulting non-finite values are
    /// propagated, never clamped.
    fn slope(&self, log_pa: f64, log_t: f64) -> Result<f64> {
        let pa = log_pa.exp();
        let t = log_t.exp();
        let qsat = self.eps * self.satvp.evaluate(t)? / pa;
        let num = (1.0 + (self.l / (self.ra * t)) * qsat) * self.ra;
        let den = self.cpa + (self.cpc + (self.l / (self.rc * t) - 1.0) * (self.l / t)) * qsat;
        Ok(num / den)
    }

    /// One fourth-order Runge-Kutta step of size `h` in ln(pa),
    /// returning the new ln(T)
    fn rk4_step(&self, log_pa: f64, log_t: f64, h: f64) -> Result<f64> {
        let k1 = self.slope(log_pa, log_t)?;
        let k2 = self.slope(log_pa + 0.5 * h, log_t + 0.5 * h * k1)?;
        let k3 = self.slope(log_pa + 0.5 * h, log_t + 0.5 * h * k2)?;
        let k4 = self.slope(log_pa + h, log_t + h * k3)?;
        Ok(log_t + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
    }

    /// Integrate the moist adiabat from the given surface conditions
    ///
    /// `p_surface` is the surface partial pressure of the noncondensible
    /// [Pa] and `t_surface` the surface temperature [K]. The surface point
    /// is the first entry of the returned profile; integration stops at
    /// the first level whose total pressure reaches or drops below the
    /// configured top-of-atmosphere pressure, and that level is kept. If
    /// the surface itself is already at or below the top pressure, the
    /// profile holds only the surface point.
    ///
    /// # Errors
    /// `InvalidPressure` / `InvalidTemperature` for non-positive surface
    /// conditions. Degenerate (non-finite) slope values are not errors:
    /// they propagate into the profile.
    pub fn profile(&self, p_surface: f64, t_surface: f64) -> Result<AdiabatProfile> {
        if p_surface <= 0.0 {
            return Err(ClimateError::InvalidPressure {
                pascals: p_surface,
            });
        }
        if t_surface <= 0.0 {
            return Err(ClimateError::InvalidTemperature { kelvin: t_surface });
        }

        let h = self.log_pressure_step;
        let mut log_pa = p_surface.ln();
        let mut log_t = t_surface.ln();

        // Surface point first
        let e_surface = self.satvp.evaluate(t_surface)?;
        let mut pressure = vec![p_surface + e_surface];
        let mut temperature = vec![t_surface];
        let mut molar = vec![e_surface / (p_surface + e_surface)];

        // Nothing to integrate when the surface already sits at or above
        // the top of the range; the profile is just the surface point
        if pressure[0] > self.top_pressure {
            loop {
                log_t = self.rk4_step(log_pa, log_t, h)?;
                log_pa += h;

                let pa = log_pa.exp();
                let t = log_t.exp();
                let e = self.satvp.evaluate(t)?;
                let p = pa + e;
                pressure.push(p);
                temperature.push(t);
                molar.push(e / p);

                // Negated comparison so a NaN pressure also terminates
                if !(p > self.top_pressure) {
                    break;
                }
            }
        }

        let mc = self.condensible.molecular_weight;
        let mnc = self.noncondensible.molecular_weight;
        let mass: Vec<f64> = molar
            .iter()
            .map(|&x| {
                let mbar = x * mc + (1.0 - x) * mnc;
                (mc / mbar) * x
            })
            .collect();

        if pressure.iter().any(|v| !v.is_finite()) {
            warn!(
                p_surface,
                t_surface, "moist adiabat profile contains non-finite values"
            );
        }
        debug!(
            levels = pressure.len(),
            p_surface, t_surface, "moist adiabat integrated"
        );

        Ok(AdiabatProfile {
            pressure,
            temperature,
            molar_concentration: molar,
            mass_concentration: mass,
        })
    }

    /// Integrate as in [`profile`](Self::profile), then re-express the
    /// result on a caller-supplied pressure grid [Pa]
    ///
    /// Temperature and the two concentrations are interpolated as
    /// functions of total pressure (windowed polynomial fit, four
    /// neighbors per side); the returned pressure sequence is a copy of
    /// `pressure_grid`.
    ///
    /// # Errors
    /// As for [`profile`](Self::profile).
    pub fn profile_on_grid(
        &self,
        p_surface: f64,
        t_surface: f64,
        pressure_grid: &[f64],
    ) -> Result<AdiabatProfile> {
        let full = self.profile(p_surface, t_surface)?;

        let t_of_p = Interp::new(full.pressure.clone(), full.temperature)?;
        let x_of_p = Interp::new(full.pressure.clone(), full.molar_concentration)?;
        let q_of_p = Interp::new(full.pressure, full.mass_concentration)?;

        let mut temperature = Vec::with_capacity(pressure_grid.len());
        let mut molar = Vec::with_capacity(pressure_grid.len());
        let mut mass = Vec::with_capacity(pressure_grid.len());
        for &p in pressure_grid {
            temperature.push(t_of_p.eval(p)?);
            molar.push(x_of_p.eval(p)?);
            mass.push(q_of_p.eval(p)?);
        }

        Ok(AdiabatProfile {
            pressure: pressure_grid.to_vec(),
            temperature,
            molar_concentration: molar,
            mass_concentration: mass,
        })
    }
}
