//! Saturation vapor pressure models
//!
//! Two independent evaluation paths:
//!
//! 1. [`water_vapor_pressure`] replicates the empirical formulation used in
//!    the GFDL climate model (circa 1995; see the Smithsonian
//!    Meteorological Tables, p. 350): log10 polynomials over liquid water
//!    and over ice, a blended "general" mode that transitions linearly
//!    between the two over the -20°C..0°C band, and the standalone
//!    Heymsfield closed form over water.
//! 2. [`SaturationVaporPressure`] is the simplified Clausius-Clapeyron
//!    relation for an arbitrary substance, assuming the perfect gas law
//!    and constant latent heat:
//!    `p(T) = p0 · exp(-(L/Rv)(1/T - 1/T0))`, `Rv = R*/M`.
//!
//! All temperatures are Kelvin and all pressures Pascals. Every entry
//! point rejects finite non-positive temperatures, since Celsius-scale
//! input is the classic user mistake here. NaN temperatures are not
//! trapped: they flow through to a NaN pressure so a degenerate upstream
//! computation stays visible.

use crate::core_types::constants::RSTAR;
use crate::core_types::gas::GasProperties;
use crate::core_types::units::Kelvin;
use crate::error::{ClimateError, Result};
use serde::{Deserialize, Serialize};

/// The ice point used by the GFDL formulation for its Celsius conversion
const GFDL_ICE_POINT: f64 = 273.16;

/// Branch selector for [`water_vapor_pressure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaterVaporMode {
    /// Saturation over liquid water; valid near or above the ice point
    Water,
    /// Saturation over ice; valid between 120 K and 273.16 K
    Ice,
    /// Water above 0°C, ice below -20°C, linear blend in between
    #[default]
    General,
    /// Heymsfield's alternate closed form over liquid water
    Heymsfield,
}

/// Saturation vapor pressure of water [Pa] at temperature `t` [K]
///
/// # Errors
/// `InvalidTemperature` if `t` is finite and not strictly positive.
pub fn water_vapor_pressure(t: f64, mode: WaterVaporMode) -> Result<f64> {
    if t <= 0.0 {
        return Err(ClimateError::InvalidTemperature { kelvin: t });
    }
    Ok(match mode {
        WaterVaporMode::Water => over_water(t),
        WaterVaporMode::Ice => over_ice(t),
        WaterVaporMode::General => general(t),
        WaterVaporMode::Heymsfield => heymsfield(t),
    })
}

/// Elementwise [`water_vapor_pressure`], selecting the branch per element
/// in `General` mode
///
/// # Errors
/// `InvalidTemperature` on the first finite non-positive element.
pub fn water_vapor_pressure_slice(ts: &[f64], mode: WaterVaporMode) -> Result<Vec<f64>> {
    ts.iter().map(|&t| water_vapor_pressure(t, mode)).collect()
}

/// GFDL polynomial over liquid water, referenced to the normal boiling
/// point (373.16 K, 1013246 in source units, scaled x0.1 to Pa)
fn over_water(t: f64) -> f64 {
    let esbasw: f64 = 1013246.0;
    let tbasw = 373.16;

    let aa = -7.90298 * (tbasw / t - 1.0);
    let b = 5.02808 * (tbasw / t).log10();
    let c = -1.3816e-7 * 10f64.powf((1.0 - t / tbasw) * 11.344 - 1.0);
    let d = 8.1328e-3 * 10f64.powf((tbasw / t - 1.0) * (-3.49149) - 1.0);
    let e = esbasw.log10();

    10f64.powf(aa + b + c + d + e) * 0.1
}

/// GFDL polynomial over ice, referenced to the triple point
/// (273.16 K, 6107.1 in source units, scaled x0.1 to Pa)
fn over_ice(t: f64) -> f64 {
    let esbasi: f64 = 6107.1;
    let tbasi = 273.16;

    let aa = -9.09718 * (tbasi / t - 1.0);
    let b = -3.56654 * (tbasi / t).log10();
    let c = 0.876793 * (1.0 - t / tbasi);
    let e = esbasi.log10();

    10f64.powf(aa + b + c + e) * 0.1
}

/// Water saturation above 0°C, ice saturation below -20°C, and a linear
/// blend of the two formulas in between. The blend is continuous at both
/// band edges because the same water/ice formulas feed it there.
fn general(t: f64) -> f64 {
    let t_celsius = t - GFDL_ICE_POINT;
    if t_celsius > 0.0 {
        over_water(t)
    } else if t_celsius < -20.0 {
        over_ice(t)
    } else {
        over_water(t) + t_celsius / 20.0 * (over_water(t) - over_ice(t))
    }
}

/// Heymsfield's formula for vapor pressure over liquid water
fn heymsfield(t: f64) -> f64 {
    let ts = 373.16;
    let sr = 3.0057166;

    let ar = ts / t;
    let br = 7.90298 * (ar - 1.0);
    let cr = 5.02808 * ar.log10();
    let dw = 1.3816e-7 * (10f64.powf(11.344 * (1.0 - 1.0 / ar)) - 1.0);
    let er = 8.1328e-3 * (10f64.powf(-(3.49149 * (ar - 1.0))) - 1.0);

    10f64.powf(cr - dw + er + sr - br) * 1.0e2
}

/// Condensed-phase selector for the Clausius-Clapeyron model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Always use the latent heat of vaporization
    Liquid,
    /// Always use the latent heat of sublimation
    Ice,
    /// Sublimation below the gas's own triple point, vaporization at or
    /// above it, decided independently at every evaluation
    #[default]
    SwitchOnTriplePoint,
}

/// Which latent heat an evaluation uses, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum LatentHeatRule {
    Fixed(f64),
    Switch {
        triple_point_t: f64,
        l_sublimation: f64,
        l_vaporization: f64,
    },
}

/// Simplified Clausius-Clapeyron saturation vapor pressure for an
/// arbitrary condensible substance
///
/// Parameters are fixed at construction; afterwards the value is a pure
/// function of temperature, so one instance can be shared and re-evaluated
/// freely.
///
/// # Example
/// ```
/// use climate_sim_core::physics::SaturationVaporPressure;
///
/// // A substance with vapor pressure 3589 Pa at 300 K
/// let svp = SaturationVaporPressure::from_constants(300.0, 3589.0, 18.0, 2.5e6);
/// assert!((svp.evaluate(300.0).unwrap() - 3589.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationVaporPressure {
    reference_t: f64,
    reference_p: f64,
    molecular_weight: f64,
    latent_heat: LatentHeatRule,
}

impl SaturationVaporPressure {
    /// Fixed-latent-heat model from four raw scalars: reference
    /// temperature [K], reference pressure [Pa], molecular weight
    /// [kg/kmol] and latent heat [J/kg]
    #[must_use]
    pub fn from_constants(
        reference_t: f64,
        reference_p: f64,
        molecular_weight: f64,
        latent_heat: f64,
    ) -> Self {
        SaturationVaporPressure {
            reference_t,
            reference_p,
            molecular_weight,
            latent_heat: LatentHeatRule::Fixed(latent_heat),
        }
    }

    /// Model anchored at a gas's triple point, with the latent heat
    /// selected by `phase`
    ///
    /// # Errors
    /// `MissingProperty` if the record lacks the triple point or the
    /// latent heat(s) the phase rule needs.
    pub fn from_gas(gas: &GasProperties, phase: Phase) -> Result<Self> {
        let reference_t = gas.require_triple_point_t()?;
        let reference_p = gas.require_triple_point_p()?;
        let latent_heat = match phase {
            Phase::Liquid => LatentHeatRule::Fixed(gas.require_l_vaporization()?),
            Phase::Ice => LatentHeatRule::Fixed(gas.require_l_sublimation()?),
            Phase::SwitchOnTriplePoint => LatentHeatRule::Switch {
                triple_point_t: reference_t,
                l_sublimation: gas.require_l_sublimation()?,
                l_vaporization: gas.require_l_vaporization()?,
            },
        };
        Ok(SaturationVaporPressure {
            reference_t,
            reference_p,
            molecular_weight: gas.molecular_weight,
            latent_heat,
        })
    }

    /// Saturation vapor pressure [Pa] at temperature `t` [K]
    ///
    /// # Errors
    /// `InvalidTemperature` if `t` is finite and not strictly positive.
    pub fn evaluate(&self, t: f64) -> Result<f64> {
        if t <= 0.0 {
            return Err(ClimateError::InvalidTemperature { kelvin: t });
        }
        let l = match self.latent_heat {
            LatentHeatRule::Fixed(l) => l,
            LatentHeatRule::Switch {
                triple_point_t,
                l_sublimation,
                l_vaporization,
            } => {
                if t < triple_point_t {
                    l_sublimation
                } else {
                    l_vaporization
                }
            }
        };
        let rv = RSTAR / self.molecular_weight;
        Ok(self.reference_p * (-(l / rv) * (1.0 / t - 1.0 / self.reference_t)).exp())
    }

    /// Typed-temperature convenience wrapper around [`evaluate`](Self::evaluate)
    ///
    /// # Errors
    /// `InvalidTemperature` for a zero-Kelvin input.
    pub fn evaluate_kelvin(&self, t: Kelvin) -> Result<f64> {
        self.evaluate(t.value())
    }

    /// Elementwise [`evaluate`](Self::evaluate), applying the phase switch
    /// independently per element
    ///
    /// # Errors
    /// `InvalidTemperature` on the first finite non-positive element.
    pub fn evaluate_slice(&self, ts: &[f64]) -> Result<Vec<f64>> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Reference-point temperature T0 [K]
    #[must_use]
    pub fn reference_temperature(&self) -> f64 {
        self.reference_t
    }

    /// Reference-point pressure p0 [Pa]
    #[must_use]
    pub fn reference_pressure(&self) -> f64 {
        self.reference_p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn water_reference_value_at_300k() {
        let p = water_vapor_pressure(300.0, WaterVaporMode::General).unwrap();
        assert_abs_diff_eq!(p, 3589.9143379302436, epsilon = 1e-6);
    }

    #[test]
    fn ice_reference_value_at_260k() {
        let p = water_vapor_pressure(260.0, WaterVaporMode::Ice).unwrap();
        assert_abs_diff_eq!(p, 195.4964678727905, epsilon = 1e-6);
    }

    #[test]
    fn general_equals_ice_in_cold_band() {
        // Below -20°C the general branch IS the ice branch
        for t in [220.0, 240.0, 253.0] {
            assert_eq!(
                water_vapor_pressure(t, WaterVaporMode::General).unwrap(),
                water_vapor_pressure(t, WaterVaporMode::Ice).unwrap()
            );
        }
    }

    #[test]
    fn general_equals_water_above_freezing() {
        for t in [273.17, 280.0, 300.0, 350.0] {
            assert_eq!(
                water_vapor_pressure(t, WaterVaporMode::General).unwrap(),
                water_vapor_pressure(t, WaterVaporMode::Water).unwrap()
            );
        }
    }

    #[test]
    fn blend_is_continuous_at_band_edges() {
        let near = 1e-9;
        let upper_out = water_vapor_pressure(GFDL_ICE_POINT + near, WaterVaporMode::General).unwrap();
        let upper_in = water_vapor_pressure(GFDL_ICE_POINT, WaterVaporMode::General).unwrap();
        assert_relative_eq!(upper_out, upper_in, max_relative = 1e-6);

        let lower_out = water_vapor_pressure(GFDL_ICE_POINT - 20.0 - near, WaterVaporMode::General).unwrap();
        let lower_in = water_vapor_pressure(GFDL_ICE_POINT - 20.0, WaterVaporMode::General).unwrap();
        assert_relative_eq!(lower_out, lower_in, max_relative = 1e-6);
    }

    #[test]
    fn general_equals_water_at_triple_point() {
        // Tc = 0 exactly sits in the blend band, with zero blend weight
        let blended = water_vapor_pressure(GFDL_ICE_POINT, WaterVaporMode::General).unwrap();
        let water = water_vapor_pressure(GFDL_ICE_POINT, WaterVaporMode::Water).unwrap();
        assert_relative_eq!(blended, water, max_relative = 1e-12);
    }

    #[test]
    fn heymsfield_tracks_water_branch() {
        // Independent formula, but the two should agree within a few percent
        for t in [280.0, 300.0, 320.0] {
            let h = water_vapor_pressure(t, WaterVaporMode::Heymsfield).unwrap();
            let w = water_vapor_pressure(t, WaterVaporMode::Water).unwrap();
            assert_relative_eq!(h, w, max_relative = 0.05);
        }
    }

    #[test]
    fn rejects_celsius_scale_input() {
        let err = water_vapor_pressure(-5.0, WaterVaporMode::General).unwrap_err();
        assert_eq!(err, ClimateError::InvalidTemperature { kelvin: -5.0 });
        assert!(SaturationVaporPressure::from_constants(300.0, 3589.0, 18.0, 2.5e6)
            .evaluate(0.0)
            .is_err());
    }

    #[test]
    fn slice_evaluation_matches_scalar() {
        let ts: Vec<f64> = (0..5).map(|i| 250.0 + 2.0 * f64::from(i)).collect();
        let ps = water_vapor_pressure_slice(&ts, WaterVaporMode::General).unwrap();
        assert_eq!(ps.len(), 5);
        for (&t, &p) in ts.iter().zip(&ps) {
            assert_eq!(p, water_vapor_pressure(t, WaterVaporMode::General).unwrap());
        }
    }

    #[test]
    fn scalar_constructor_identity_at_reference_point() {
        let svp = SaturationVaporPressure::from_constants(300.0, 3589.0, 18.0, 2.5e6);
        assert_abs_diff_eq!(svp.evaluate(300.0).unwrap(), 3589.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            svp.evaluate_kelvin(Kelvin::new(300.0)).unwrap(),
            3589.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn switch_mode_uses_sublimation_below_triple_point() {
        let co2 = GasProperties::carbon_dioxide();
        let switching =
            SaturationVaporPressure::from_gas(&co2, Phase::SwitchOnTriplePoint).unwrap();
        let liquid = SaturationVaporPressure::from_gas(&co2, Phase::Liquid).unwrap();
        let ice = SaturationVaporPressure::from_gas(&co2, Phase::Ice).unwrap();

        let below = 200.0; // below the CO2 triple point at 216.54 K
        let above = 230.0;
        assert_eq!(
            switching.evaluate(below).unwrap(),
            ice.evaluate(below).unwrap()
        );
        assert_eq!(
            switching.evaluate(above).unwrap(),
            liquid.evaluate(above).unwrap()
        );
        // All three agree at the anchor point
        assert_relative_eq!(
            switching.evaluate(216.54).unwrap(),
            co2.triple_point_p.unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn switch_applies_per_element_in_slices() {
        let co2 = GasProperties::carbon_dioxide();
        let svp = SaturationVaporPressure::from_gas(&co2, Phase::SwitchOnTriplePoint).unwrap();
        let ts = [200.0, 216.54, 230.0];
        let ps = svp.evaluate_slice(&ts).unwrap();
        for (&t, &p) in ts.iter().zip(&ps) {
            assert_eq!(p, svp.evaluate(t).unwrap());
        }
    }

    #[test]
    fn air_cannot_back_a_clausius_clapeyron_model() {
        let air = GasProperties::earth_air();
        assert!(SaturationVaporPressure::from_gas(&air, Phase::default()).is_err());
    }
}
