//! Physical process models: saturation vapor pressure, moist adiabats
//! and blackbody radiation

pub mod moist_adiabat;
pub mod radiation;
pub mod satvp;

pub use moist_adiabat::{AdiabatProfile, MoistAdiabat};
pub use radiation::planck_radiance;
pub use satvp::{
    water_vapor_pressure, water_vapor_pressure_slice, Phase, SaturationVaporPressure,
    WaterVaporMode,
};
