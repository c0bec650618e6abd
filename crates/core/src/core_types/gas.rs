//! Physical properties of gases (mks units)
//!
//! The values are approximate means for "normal" temperatures and pressures,
//! suitable for rough calculations. Missing data is represented as `None`,
//! never as zero, so a computation that needs an unavailable property fails
//! loudly instead of silently producing garbage.
//!
//! Latent heats of vaporization are tabulated both at the boiling point (the
//! temperature where saturation vapor pressure reaches 1.013 bar) and at the
//! triple point. For CO2 the "boiling point" lies below the triple point, so
//! its boiling-point latent heat is not given. The `l_vaporization` field
//! holds the default to use: the triple-point value when available,
//! otherwise the boiling-point value.

use crate::core_types::constants::RSTAR;
use crate::error::{ClimateError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Thermodynamic record for a single gas
///
/// Units: temperatures [K], pressures [Pa], latent heats [J/kg],
/// densities [kg/m³], specific heat [J/(kg K)], molecular weight [kg/kmol].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    /// Full name of the gas, e.g. "Water"
    pub name: String,
    /// Chemical formula, e.g. "H2O"; used as the table key
    pub formula: String,
    /// Critical point temperature [K]
    pub critical_point_t: Option<f64>,
    /// Critical point pressure [Pa]
    pub critical_point_p: Option<f64>,
    /// Triple point temperature [K]
    pub triple_point_t: Option<f64>,
    /// Triple point pressure [Pa]
    pub triple_point_p: Option<f64>,
    /// Latent heat of vaporization at the boiling point [J/kg]
    pub l_vaporization_boiling_point: Option<f64>,
    /// Latent heat of vaporization at the triple point [J/kg]
    pub l_vaporization_triple_point: Option<f64>,
    /// Latent heat of fusion at the triple point [J/kg]
    pub l_fusion: Option<f64>,
    /// Latent heat of sublimation at the triple point [J/kg]
    pub l_sublimation: Option<f64>,
    /// Liquid phase density at the boiling point [kg/m³]
    pub rho_liquid_boiling_point: Option<f64>,
    /// Liquid phase density at the triple point [kg/m³]
    pub rho_liquid_triple_point: Option<f64>,
    /// Solid phase density at (or near) the triple point [kg/m³]
    pub rho_solid: Option<f64>,
    /// Gas phase specific heat at constant pressure [J/(kg K)], at 298 K and 1 bar
    pub cp: f64,
    /// Ratio of specific heats cp/cv, at 298 K and 1 bar
    pub gamma: f64,
    /// Molecular weight of the dominant isotopologue [kg/kmol]
    pub molecular_weight: f64,
    /// Default latent heat of vaporization [J/kg]: triple point value if
    /// available, else boiling point value
    pub l_vaporization: Option<f64>,
    /// Default liquid density [kg/m³]: triple point value if available,
    /// else boiling point value
    pub rho_liquid: Option<f64>,
}

impl GasProperties {
    /// Specific gas constant R = R*/M [J/(kg K)]
    #[inline]
    #[must_use]
    pub fn gas_constant(&self) -> f64 {
        RSTAR / self.molecular_weight
    }

    /// Adiabatic exponent R/cp
    #[inline]
    #[must_use]
    pub fn r_cp(&self) -> f64 {
        self.gas_constant() / self.cp
    }

    /// Triple point temperature
    ///
    /// # Errors
    /// `MissingProperty` if the record has no triple point temperature.
    pub fn require_triple_point_t(&self) -> Result<f64> {
        self.triple_point_t.ok_or_else(|| ClimateError::MissingProperty {
            formula: self.formula.clone(),
            property: "triple_point_t",
        })
    }

    /// Triple point pressure
    ///
    /// # Errors
    /// `MissingProperty` if the record has no triple point pressure.
    pub fn require_triple_point_p(&self) -> Result<f64> {
        self.triple_point_p.ok_or_else(|| ClimateError::MissingProperty {
            formula: self.formula.clone(),
            property: "triple_point_p",
        })
    }

    /// Default latent heat of vaporization
    ///
    /// # Errors
    /// `MissingProperty` if the record has no vaporization data.
    pub fn require_l_vaporization(&self) -> Result<f64> {
        self.l_vaporization.ok_or_else(|| ClimateError::MissingProperty {
            formula: self.formula.clone(),
            property: "l_vaporization",
        })
    }

    /// Latent heat of sublimation
    ///
    /// # Errors
    /// `MissingProperty` if the record has no sublimation data.
    pub fn require_l_sublimation(&self) -> Result<f64> {
        self.l_sublimation.ok_or_else(|| ClimateError::MissingProperty {
            formula: self.formula.clone(),
            property: "l_sublimation",
        })
    }

    /// Water vapor (H2O)
    #[must_use]
    pub fn water() -> Self {
        GasProperties {
            name: "Water".to_string(),
            formula: "H2O".to_string(),
            critical_point_t: Some(647.1),
            critical_point_p: Some(2.21e7),
            triple_point_t: Some(273.15),
            triple_point_p: Some(611.0),
            l_vaporization_boiling_point: Some(2.255e6),
            l_vaporization_triple_point: Some(2.493e6),
            l_fusion: Some(3.34e5),
            l_sublimation: Some(2.84e6),
            rho_liquid_boiling_point: Some(958.4),
            rho_liquid_triple_point: Some(999.87),
            rho_solid: Some(917.0),
            cp: 1847.0,
            gamma: 1.331,
            molecular_weight: 18.0,
            l_vaporization: Some(2.493e6),
            rho_liquid: Some(999.87),
        }
    }

    /// Methane (CH4)
    #[must_use]
    pub fn methane() -> Self {
        GasProperties {
            name: "Methane".to_string(),
            formula: "CH4".to_string(),
            critical_point_t: Some(190.44),
            critical_point_p: Some(4.596e6),
            triple_point_t: Some(90.67),
            triple_point_p: Some(1.17e4),
            l_vaporization_boiling_point: Some(5.1e5),
            l_vaporization_triple_point: Some(5.36e5),
            l_fusion: Some(5.868e4),
            l_sublimation: Some(5.95e5),
            rho_liquid_boiling_point: Some(450.2),
            rho_liquid_triple_point: None,
            rho_solid: Some(509.3),
            cp: 2195.0,
            gamma: 1.305,
            molecular_weight: 16.0,
            l_vaporization: Some(5.36e5),
            rho_liquid: Some(450.2),
        }
    }

    /// Carbon dioxide (CO2)
    #[must_use]
    pub fn carbon_dioxide() -> Self {
        GasProperties {
            name: "Carbon_Dioxide".to_string(),
            formula: "CO2".to_string(),
            critical_point_t: Some(304.2),
            critical_point_p: Some(7.3825e6),
            triple_point_t: Some(216.54),
            triple_point_p: Some(5.185e5),
            l_vaporization_boiling_point: None,
            l_vaporization_triple_point: Some(3.97e5),
            l_fusion: Some(1.96e5),
            l_sublimation: Some(5.93e5),
            rho_liquid_boiling_point: Some(1032.0),
            rho_liquid_triple_point: Some(1110.0),
            rho_solid: Some(1562.0),
            cp: 820.0,
            gamma: 1.294,
            molecular_weight: 44.0,
            l_vaporization: Some(3.97e5),
            rho_liquid: Some(1110.0),
        }
    }

    /// Nitrogen (N2)
    #[must_use]
    pub fn nitrogen() -> Self {
        GasProperties {
            name: "Nitrogen".to_string(),
            formula: "N2".to_string(),
            critical_point_t: Some(126.2),
            critical_point_p: Some(3.4e6),
            triple_point_t: Some(63.14),
            triple_point_p: Some(1.253e4),
            l_vaporization_boiling_point: Some(1.98e5),
            l_vaporization_triple_point: Some(2.18e5),
            l_fusion: Some(2.573e4),
            l_sublimation: Some(2.437e5),
            rho_liquid_boiling_point: Some(808.6),
            rho_liquid_triple_point: None,
            rho_solid: Some(1026.0),
            cp: 1037.0,
            gamma: 1.403,
            molecular_weight: 28.0,
            l_vaporization: Some(2.18e5),
            rho_liquid: Some(808.6),
        }
    }

    /// Oxygen (O2)
    #[must_use]
    pub fn oxygen() -> Self {
        GasProperties {
            name: "Oxygen".to_string(),
            formula: "O2".to_string(),
            critical_point_t: Some(154.54),
            critical_point_p: Some(5.043e6),
            triple_point_t: Some(54.3),
            triple_point_p: Some(150.0),
            l_vaporization_boiling_point: Some(2.13e5),
            l_vaporization_triple_point: Some(2.42e5),
            l_fusion: Some(1.39e4),
            l_sublimation: Some(2.56e5),
            rho_liquid_boiling_point: Some(1141.0),
            rho_liquid_triple_point: Some(1307.0),
            rho_solid: Some(1351.0),
            cp: 916.0,
            gamma: 1.393,
            molecular_weight: 32.0,
            l_vaporization: Some(2.42e5),
            rho_liquid: Some(1307.0),
        }
    }

    /// Hydrogen (H2)
    #[must_use]
    pub fn hydrogen() -> Self {
        GasProperties {
            name: "Hydrogen".to_string(),
            formula: "H2".to_string(),
            critical_point_t: Some(33.2),
            critical_point_p: Some(1.298e6),
            triple_point_t: Some(13.95),
            triple_point_p: Some(7.2e3),
            l_vaporization_boiling_point: Some(4.54e5),
            l_vaporization_triple_point: None,
            l_fusion: Some(5.82e4),
            l_sublimation: None,
            rho_liquid_boiling_point: Some(70.97),
            rho_liquid_triple_point: None,
            rho_solid: Some(88.0),
            cp: 14230.0,
            gamma: 1.384,
            molecular_weight: 2.0,
            l_vaporization: Some(4.54e5),
            rho_liquid: Some(70.97),
        }
    }

    /// Helium (He)
    #[must_use]
    pub fn helium() -> Self {
        GasProperties {
            name: "Helium".to_string(),
            formula: "He".to_string(),
            critical_point_t: Some(5.1),
            critical_point_p: Some(2.28e5),
            triple_point_t: Some(2.17),
            triple_point_p: Some(5.07e3),
            l_vaporization_boiling_point: Some(2.03e4),
            l_vaporization_triple_point: None,
            l_fusion: None,
            l_sublimation: None,
            rho_liquid_boiling_point: Some(124.96),
            rho_liquid_triple_point: None,
            rho_solid: Some(200.0),
            cp: 5196.0,
            gamma: 1.664,
            molecular_weight: 4.0,
            l_vaporization: Some(2.03e4),
            rho_liquid: Some(124.96),
        }
    }

    /// Ammonia (NH3)
    #[must_use]
    pub fn ammonia() -> Self {
        GasProperties {
            name: "Ammonia".to_string(),
            formula: "NH3".to_string(),
            critical_point_t: Some(405.5),
            critical_point_p: Some(1.128e7),
            triple_point_t: Some(195.4),
            triple_point_p: Some(6.1e3),
            l_vaporization_boiling_point: Some(1.371e6),
            l_vaporization_triple_point: Some(1.658e6),
            l_fusion: Some(3.314e5),
            l_sublimation: Some(1.989e6),
            rho_liquid_boiling_point: Some(682.0),
            rho_liquid_triple_point: Some(734.2),
            rho_solid: Some(822.6),
            cp: 2060.0,
            gamma: 1.309,
            molecular_weight: 17.0,
            l_vaporization: Some(1.658e6),
            rho_liquid: Some(734.2),
        }
    }

    /// Modern Earth air. A mixture, so it has no phase-change data;
    /// only cp, gamma and the mean molecular weight are meaningful.
    #[must_use]
    pub fn earth_air() -> Self {
        GasProperties {
            name: "Earth_Air".to_string(),
            formula: "air".to_string(),
            critical_point_t: None,
            critical_point_p: None,
            triple_point_t: None,
            triple_point_p: None,
            l_vaporization_boiling_point: None,
            l_vaporization_triple_point: None,
            l_fusion: None,
            l_sublimation: None,
            rho_liquid_boiling_point: None,
            rho_liquid_triple_point: None,
            rho_solid: None,
            cp: 1004.0,
            gamma: 1.4003,
            molecular_weight: 28.97,
            l_vaporization: None,
            rho_liquid: None,
        }
    }
}

/// Keyed collection of gas records, indexed by chemical formula
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GasTable {
    gases: FxHashMap<String, GasProperties>,
}

impl GasTable {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        GasTable {
            gases: FxHashMap::default(),
        }
    }

    /// Table prepopulated with the nine stock gas records
    #[must_use]
    pub fn standard() -> Self {
        let mut table = GasTable::new();
        for gas in [
            GasProperties::water(),
            GasProperties::methane(),
            GasProperties::carbon_dioxide(),
            GasProperties::nitrogen(),
            GasProperties::oxygen(),
            GasProperties::hydrogen(),
            GasProperties::helium(),
            GasProperties::ammonia(),
            GasProperties::earth_air(),
        ] {
            table.insert(gas);
        }
        table
    }

    /// Look up a gas by formula, e.g. `table.get("CO2")`
    #[must_use]
    pub fn get(&self, formula: &str) -> Option<&GasProperties> {
        self.gases.get(formula)
    }

    /// Insert (or replace) a record, keyed by its formula
    pub fn insert(&mut self, gas: GasProperties) {
        self.gases.insert(gas.formula.clone(), gas);
    }

    /// Number of records in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.gases.len()
    }

    /// Whether the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gases.is_empty()
    }

    /// Iterate over all records in the table
    pub fn iter(&self) -> impl Iterator<Item = &GasProperties> {
        self.gases.values()
    }
}
