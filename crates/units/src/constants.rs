//! Physical constants at the precision the architecture measures are defined with.
//!
//! Changing any of these shifts every published measure value, so they are
//! kept at exactly these digits rather than at CODATA precision.

/// Newton's constant in SI units (m³ kg⁻¹ s⁻²)
pub const BIG_G: f64 = 6.67e-11;

/// Solar radius in meters
pub const R_SUN: f64 = 6.957e8;

/// Solar mass in kilograms
pub const M_SUN: f64 = 1.988e30;

/// Earth masses per solar mass (M☉/M⊕)
pub const MASS_RATIO_SUN_EARTH: f64 = 332948.6;

/// Orbital period of the Earth in days
pub const EARTH_YEAR_DAYS: f64 = 365.24;

/// Semimajor axis of the Earth in solar radii
pub const EARTH_SEMIMAJOR_AXIS_SOLAR_RADII: f64 = 215.05;

/// Seconds in one day
pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// Newton's constant in R☉³ M☉⁻¹ day⁻²
pub const G_NORMALIZED: f64 =
    BIG_G / (R_SUN * R_SUN * R_SUN) * M_SUN * (SECONDS_PER_DAY * SECONDS_PER_DAY);

/// One solar mass per cubic solar radius, in kg/m³
///
/// This is the density unit the transit duration model takes. The Sun's mean
/// density is `3/(4π)` of it.
pub const SOLAR_UNIT_DENSITY_KG_M3: f64 = M_SUN / (R_SUN * R_SUN * R_SUN);
