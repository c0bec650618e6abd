//! Planetary database (mks units)
//!
//! Data for the planets and a few moons, from the NSSDC planetary fact
//! sheets (<http://nssdc.gsfc.nasa.gov/planetary/factsheet/>). For the gas
//! giants, "surface" quantities are given at the 1 bar level. For moons,
//! the orbital quantities (semi-major axis, year, solar constant,
//! eccentricity) are those of the planet they orbit.
//!
//! Source data uses Earth masses, hours and Earth days; the constructors
//! here store everything in kg and seconds.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mass of the Earth [kg], the unit the source table uses for body masses
const EARTH_MASS: f64 = 5.9722e24;

/// Seconds per hour, used for the tabulated day lengths
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per Earth day, used for the tabulated year lengths
const SECONDS_PER_EARTH_DAY: f64 = 86400.0;

/// Classification of a body in the planetary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyClass {
    /// One of the eight major planets
    Planet,
    /// A natural satellite
    Moon,
    /// Neither (Pluto)
    Minor,
}

/// Basic planetary data record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Name of the body
    pub name: String,
    /// Mean radius [m]
    pub radius: f64,
    /// Surface gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Bond albedo (fraction)
    pub albedo: f64,
    /// Annual mean solar constant, current epoch [W/m²]
    pub solar_constant: f64,
    /// Mass of the body [kg]
    pub mass: f64,
    /// Semi-major axis of the orbit about the Sun [m]
    pub orbit_semimajor_axis: f64,
    /// Sidereal length of year [s]
    pub year: f64,
    /// Orbital eccentricity
    pub eccentricity: f64,
    /// Mean tropical length of day [s]
    pub day: f64,
    /// Obliquity to orbit [degrees]
    pub obliquity: Option<f64>,
    /// Mean surface temperature [K]
    pub t_surface_mean: Option<f64>,
    /// Maximum surface temperature [K]
    pub t_surface_max: Option<f64>,
    /// Minimum surface temperature [K]
    pub t_surface_min: Option<f64>,
    /// Planet, moon or minor body
    pub class: BodyClass,
    /// Body at the center of the orbit
    pub orbits: String,
}

impl Planet {
    #[allow(clippy::too_many_arguments)]
    fn body(
        name: &str,
        radius: f64,
        gravity: f64,
        albedo: f64,
        solar_constant: f64,
        mass_earths: f64,
        orbit_semimajor_axis: f64,
        year_earth_days: f64,
        eccentricity: f64,
        day_hours: f64,
        obliquity: Option<f64>,
        t_surface_mean: Option<f64>,
        t_surface_max: Option<f64>,
        t_surface_min: Option<f64>,
        class: BodyClass,
        orbits: &str,
    ) -> Self {
        Planet {
            name: name.to_string(),
            radius,
            gravity,
            albedo,
            solar_constant,
            mass: mass_earths * EARTH_MASS,
            orbit_semimajor_axis,
            year: year_earth_days * SECONDS_PER_EARTH_DAY,
            eccentricity,
            day: day_hours * SECONDS_PER_HOUR,
            obliquity,
            t_surface_mean,
            t_surface_max,
            t_surface_min,
            class,
            orbits: orbits.to_string(),
        }
    }

    /// Earth
    #[must_use]
    pub fn earth() -> Self {
        Planet::body(
            "Earth", 6.371e6, 9.798, 0.306, 1367.6, 1.0, 149.60e9, 365.256,
            0.0167, 24.0, Some(23.45), Some(288.0), None, None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Mercury
    #[must_use]
    pub fn mercury() -> Self {
        Planet::body(
            "Mercury", 2.4397e6, 3.70, 0.119, 9126.6, 0.0553, 57.91e9, 87.969,
            0.2056, 4222.6, Some(0.01), Some(440.0), Some(725.0), None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Venus
    #[must_use]
    pub fn venus() -> Self {
        Planet::body(
            "Venus", 6.0518e6, 8.87, 0.750, 2613.9, 0.815, 108.21e9, 224.701,
            0.0067, 2802.0, Some(177.36), Some(737.0), Some(737.0), None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Mars
    #[must_use]
    pub fn mars() -> Self {
        Planet::body(
            "Mars", 3.390e6, 3.71, 0.250, 589.2, 0.107, 227.92e9, 686.98,
            0.0935, 24.6597, Some(25.19), Some(210.0), Some(295.0), None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Jupiter (surface quantities at the 1 bar level)
    #[must_use]
    pub fn jupiter() -> Self {
        Planet::body(
            "Jupiter", 69.911e6, 24.79, 0.343, 50.5, 317.8, 778.57e9, 4332.0,
            0.0489, 9.9259, Some(3.13), Some(165.0), None, None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Saturn (surface quantities at the 1 bar level)
    #[must_use]
    pub fn saturn() -> Self {
        Planet::body(
            "Saturn", 58.232e6, 10.44, 0.342, 14.90, 95.2, 1433.0e9, 10759.0,
            0.0565, 10.656, Some(26.73), Some(134.0), None, None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Uranus (surface quantities at the 1 bar level)
    #[must_use]
    pub fn uranus() -> Self {
        Planet::body(
            "Uranus", 25.362e6, 8.87, 0.300, 3.71, 14.5, 2872.46e9, 30685.4,
            0.0457, 17.24, Some(97.77), Some(76.0), None, None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Neptune (surface quantities at the 1 bar level)
    #[must_use]
    pub fn neptune() -> Self {
        Planet::body(
            "Neptune", 26.624e6, 11.15, 0.290, 1.51, 17.2, 4495.06e9, 60189.0,
            0.0113, 16.11, Some(28.32), Some(72.0), None, None,
            BodyClass::Planet, "Sun",
        )
    }

    /// Pluto
    #[must_use]
    pub fn pluto() -> Self {
        Planet::body(
            "Pluto", 1.195e6, 0.58, 0.5, 0.89, 0.00218, 5906.0e9, 90465.0,
            0.2488, 153.2820, Some(122.53), Some(50.0), None, None,
            BodyClass::Minor, "Sun",
        )
    }

    /// Earth's Moon
    #[must_use]
    pub fn moon() -> Self {
        Planet::body(
            "Moon", 1.737e6, 1.62, 0.11, 1367.6, 0.0123, 149.60e9, 365.256,
            0.0167, 28.0, None, None, Some(400.0), Some(100.0),
            BodyClass::Moon, "Earth",
        )
    }

    /// Titan
    #[must_use]
    pub fn titan() -> Self {
        Planet::body(
            "Titan", 2.575e6, 1.35, 0.21, 14.90, 0.0225, 1433.0e9, 10759.0,
            0.0565, 15.9452, Some(26.73), Some(95.0), None, None,
            BodyClass::Moon, "Saturn",
        )
    }

    /// Europa
    #[must_use]
    pub fn europa() -> Self {
        Planet::body(
            "Europa", 1.560e6, 1.31, 0.67, 50.5, 0.008, 778.57e9, 4332.0,
            0.0489, 3.551, Some(3.13), Some(103.0), Some(125.0), None,
            BodyClass::Moon, "Jupiter",
        )
    }

    /// Triton
    #[must_use]
    pub fn triton() -> Self {
        Planet::body(
            "Triton", 1.3534e6, 0.78, 0.76, 1.51, 0.00359, 4495.06e9, 60189.0,
            0.0113, 5.877, Some(156.0), Some(34.5), None, None,
            BodyClass::Moon, "Neptune",
        )
    }
}

/// Keyed collection of planetary records, indexed by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanetTable {
    bodies: FxHashMap<String, Planet>,
}

impl PlanetTable {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        PlanetTable {
            bodies: FxHashMap::default(),
        }
    }

    /// Table prepopulated with the thirteen stock body records
    #[must_use]
    pub fn standard() -> Self {
        let mut table = PlanetTable::new();
        for body in [
            Planet::mercury(),
            Planet::venus(),
            Planet::earth(),
            Planet::mars(),
            Planet::jupiter(),
            Planet::saturn(),
            Planet::uranus(),
            Planet::neptune(),
            Planet::pluto(),
            Planet::moon(),
            Planet::titan(),
            Planet::europa(),
            Planet::triton(),
        ] {
            table.insert(body);
        }
        table
    }

    /// Look up a body by name, e.g. `table.get("Mars")`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Planet> {
        self.bodies.get(name)
    }

    /// Insert (or replace) a record, keyed by its name
    pub fn insert(&mut self, body: Planet) {
        self.bodies.insert(body.name.clone(), body);
    }

    /// Number of records in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over all records in the table
    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.bodies.values()
    }
}
