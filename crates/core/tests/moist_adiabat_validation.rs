//! Moist Adiabat Validation Test Suite
//!
//! Validates shape, termination, and physical plausibility of integrated
//! moist adiabatic profiles for Earth-like and exotic atmospheres.
//!
//! # Test Categories
//! 1. Profile shape and termination
//! 2. Physical plausibility (lapse rates, concentration behavior)
//! 3. Grid re-expression
//! 4. Configuration and validation
//!
//! Run tests with: `cargo test --test moist_adiabat_validation`

use approx::assert_relative_eq;
use climate_sim_core::{GasProperties, MoistAdiabat};

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: PROFILE SHAPE AND TERMINATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Pressure decreases strictly monotonically from surface to top
#[test]
fn test_pressure_strictly_decreasing() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 300.0).unwrap();
    for w in profile.pressure.windows(2) {
        assert!(w[1] < w[0], "pressure not decreasing: {} -> {}", w[0], w[1]);
    }
}

/// Integration terminates at or below the configured top pressure, and
/// the terminating level is included
#[test]
fn test_terminates_at_top_pressure() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 300.0).unwrap();
    let last = *profile.pressure.last().unwrap();
    assert!(last <= ma.top_pressure(), "stopped above ptop: {last}");
    // Only the final level may cross
    let n = profile.len();
    assert!(profile.pressure[n - 2] > ma.top_pressure());
}

/// All four sequences stay the same length
#[test]
fn test_sequences_equal_length() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 300.0).unwrap();
    let n = profile.len();
    assert!(n > 10, "suspiciously short profile: {n} levels");
    assert_eq!(profile.temperature.len(), n);
    assert_eq!(profile.molar_concentration.len(), n);
    assert_eq!(profile.mass_concentration.len(), n);
}

/// The surface point leads the profile with the given temperature
#[test]
fn test_surface_point_first() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 288.0).unwrap();
    assert_eq!(profile.temperature[0], 288.0);
    // Total surface pressure includes the vapor partial pressure
    assert!(profile.pressure[0] > 1.0e5);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: PHYSICAL PLAUSIBILITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Temperature decreases with height along a moist adiabat
#[test]
fn test_temperature_decreases_upward() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 300.0).unwrap();
    for w in profile.temperature.windows(2) {
        assert!(w[1] < w[0], "temperature inversion: {} -> {}", w[0], w[1]);
    }
}

/// The near-surface lapse rate for warm moist Earth air sits between the
/// saturated (~4 K/km) and dry (~10 K/km) limits
#[test]
fn test_earth_lapse_rate_in_moist_range() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 300.0).unwrap();
    // d(ln T)/d(ln p) near the surface
    let dlnt = (profile.temperature[1] / profile.temperature[0]).ln();
    let dlnp = (profile.pressure[1] / profile.pressure[0]).ln();
    let slope = dlnt / dlnp;
    let dry = GasProperties::earth_air().r_cp();
    assert!(
        slope > 0.3 * dry && slope < dry,
        "moist slope {slope:.4} outside (0.3, 1.0) x dry adiabat {dry:.4}"
    );
}

/// A cold dry atmosphere follows the dry adiabat T ∝ p^(R/cp)
#[test]
fn test_cold_atmosphere_follows_dry_adiabat() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 180.0).unwrap();
    let r_cp = GasProperties::earth_air().r_cp();
    let n = profile.len();
    // Compare the midpoint against the analytic power law
    let mid = n / 2;
    let expected = 180.0 * (profile.pressure[mid] / profile.pressure[0]).powf(r_cp);
    assert_relative_eq!(profile.temperature[mid], expected, max_relative = 1e-3);
}

/// Molar concentration of water drops rapidly with height on a cool
/// Earth-like adiabat
#[test]
fn test_water_concentration_decreases_upward() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 280.0).unwrap();
    let n = profile.len();
    assert!(profile.molar_concentration[0] < 0.02);
    assert!(
        profile.molar_concentration[n / 2] < profile.molar_concentration[0] / 10.0,
        "vapor did not condense out with height"
    );
}

/// Mass concentration is below molar concentration for water in air
/// (water is lighter than the mean molecular weight of the mixture)
#[test]
fn test_mass_concentration_below_molar_for_water() {
    let ma = MoistAdiabat::earth().unwrap();
    let profile = ma.profile(1.0e5, 300.0).unwrap();
    for (q, x) in profile
        .mass_concentration
        .iter()
        .zip(&profile.molar_concentration)
    {
        assert!(q <= x, "mass fraction {q} above molar fraction {x}");
    }
}

/// A CO2/N2 atmosphere (early-Mars style) also integrates cleanly
#[test]
fn test_co2_condensing_in_nitrogen() {
    let ma = MoistAdiabat::new(GasProperties::carbon_dioxide(), GasProperties::nitrogen()).unwrap();
    let profile = ma.profile(2.0e5, 250.0).unwrap();
    assert!(profile.len() > 10);
    for w in profile.temperature.windows(2) {
        assert!(w[1] < w[0]);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: GRID RE-EXPRESSION
// ═══════════════════════════════════════════════════════════════════════════════

/// The grid variant returns the caller's pressures verbatim and
/// interpolated temperatures consistent with the native profile
#[test]
fn test_profile_on_grid_matches_native() {
    let ma = MoistAdiabat::earth().unwrap();
    let native = ma.profile(1.0e5, 300.0).unwrap();
    let grid: Vec<f64> = (1..=9).map(|i| f64::from(i) * 1.0e4).collect();
    let on_grid = ma.profile_on_grid(1.0e5, 300.0, &grid).unwrap();

    assert_eq!(on_grid.pressure, grid);
    assert_eq!(on_grid.len(), grid.len());

    // Each gridded temperature must sit between its bracketing native levels
    for (&p, &t) in grid.iter().zip(&on_grid.temperature) {
        let i = native.pressure.partition_point(|&v| v > p);
        let (hi, lo) = (native.temperature[i - 1], native.temperature[i]);
        assert!(
            t <= hi * (1.0 + 1e-6) && t >= lo * (1.0 - 1e-6),
            "gridded T {t} outside native bracket [{lo}, {hi}] at {p} Pa"
        );
    }
}

/// Gridded concentrations remain physical
#[test]
fn test_profile_on_grid_concentrations_physical() {
    let ma = MoistAdiabat::earth().unwrap();
    let grid = [9.0e4, 5.0e4, 1.0e4, 1.0e3];
    let on_grid = ma.profile_on_grid(1.0e5, 290.0, &grid).unwrap();
    for (&x, &q) in on_grid
        .molar_concentration
        .iter()
        .zip(&on_grid.mass_concentration)
    {
        assert!(x >= -1e-12 && x < 1.0);
        assert!(q >= -1e-12 && q < 1.0);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: CONFIGURATION AND VALIDATION
// ═══════════════════════════════════════════════════════════════════════════════

/// A higher top pressure truncates the profile earlier
#[test]
fn test_top_pressure_controls_extent() {
    let shallow = MoistAdiabat::earth().unwrap().with_top_pressure(1.0e4);
    let deep = MoistAdiabat::earth().unwrap();
    let p_shallow = shallow.profile(1.0e5, 300.0).unwrap();
    let p_deep = deep.profile(1.0e5, 300.0).unwrap();
    assert!(p_shallow.len() < p_deep.len());
    assert!(*p_shallow.pressure.last().unwrap() <= 1.0e4);
}

/// A finer step yields more levels but the same temperatures at depth
#[test]
fn test_step_refinement_converges() {
    let coarse = MoistAdiabat::earth().unwrap();
    let fine = MoistAdiabat::earth().unwrap().with_log_pressure_step(0.01);
    let pc = coarse.profile(1.0e5, 300.0).unwrap();
    let pf = fine.profile(1.0e5, 300.0).unwrap();
    assert!(pf.len() > 4 * pc.len());

    // Compare at a shared pressure via the gridded interface
    let grid = [5.0e4];
    let tc = coarse.profile_on_grid(1.0e5, 300.0, &grid).unwrap().temperature[0];
    let tf = fine.profile_on_grid(1.0e5, 300.0, &grid).unwrap().temperature[0];
    assert_relative_eq!(tc, tf, max_relative = 1e-4);
}

/// Non-positive surface conditions are rejected up front
#[test]
fn test_rejects_invalid_surface_conditions() {
    let ma = MoistAdiabat::earth().unwrap();
    assert!(ma.profile(0.0, 300.0).is_err());
    assert!(ma.profile(1.0e5, -15.0).is_err());
}

/// A top pressure at or above the surface yields just the surface point,
/// with no integration step taken past it
#[test]
fn test_surface_at_top_pressure_yields_surface_only() {
    let ma = MoistAdiabat::earth().unwrap().with_top_pressure(2.0e5);
    let profile = ma.profile(1.0e5, 300.0).unwrap();
    assert_eq!(profile.len(), 1);
    assert_eq!(profile.temperature[0], 300.0);
    assert!(profile.pressure[0] <= 2.0e5);
}

/// Degenerate thermodynamic inputs make the lapse-rate slope non-finite;
/// the resulting NaNs flow into the returned profile (with a logged
/// warning) instead of being converted to an error
#[test]
fn test_nonfinite_slope_propagates_into_profile() {
    // Install a real subscriber so the warning path is exercised end to end
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let broken_air = GasProperties {
        cp: f64::NAN,
        ..GasProperties::earth_air()
    };
    let ma = MoistAdiabat::new(GasProperties::water(), broken_air).unwrap();
    let profile = ma.profile(1.0e5, 300.0).unwrap();

    // The surface point is still finite; the first integrated level is not
    assert_eq!(profile.len(), 2);
    assert!(profile.pressure[0].is_finite());
    assert_eq!(profile.temperature[0], 300.0);
    assert!(profile.pressure[1].is_nan());
    assert!(profile.temperature[1].is_nan());
    assert!(profile.molar_concentration[1].is_nan());
}
