//! Core data types: physical constants, unit wrappers, gas and planetary tables

pub mod constants;
pub mod gas;
pub mod planet;
pub mod units;

pub use gas::{GasProperties, GasTable};
pub use planet::{BodyClass, Planet, PlanetTable};
pub use units::{Celsius, Kelvin, Pascals};
