//! Orbital geometry from Kepler's third law.

use units::{Length, MASS_RATIO_SUN_EARTH, Mass, Time};

/// Semimajor axis of an orbit around a star of the given mass.
///
/// Scaled from the Earth's orbit: `a = a⊕ ((P/P⊕)² / M★)^(1/3)`.
pub fn semimajor_axis(period: Time, stellar_mass: Mass) -> Length {
    let years = period.to_earth_years();
    Length::from_au((years.powi(2) * (1.0 / stellar_mass.to_solar_masses())).powf(1.0 / 3.0))
}

/// Convert orbital periods (days) to semimajor axes (solar radii).
///
/// Inputs are not validated: a non-positive stellar mass or period yields
/// NaN or infinite axes.
///
/// # Examples
///
/// ```
/// use architecture::kepler::period_to_semimajor_axis;
///
/// let axes = period_to_semimajor_axis(&[365.24], 1.0);
/// assert!((axes[0] - 215.05).abs() < 1e-9);
/// ```
pub fn period_to_semimajor_axis(periods: &[f64], stellar_mass: f64) -> Vec<f64> {
    let stellar_mass = Mass::from_solar_masses(stellar_mass);
    periods
        .iter()
        .map(|&period| semimajor_axis(Time::from_days(period), stellar_mass).to_solar_radii())
        .collect()
}

/// Mutual Hill radius of two adjacent planets
///
/// # Arguments
///
/// * `inner_mass`, `outer_mass` - Planet masses in Earth masses
/// * `inner_axis`, `outer_axis` - Semimajor axes (any length unit; the result shares it)
/// * `stellar_mass` - Star mass in solar masses
pub fn mutual_hill_radius(
    inner_mass: f64,
    outer_mass: f64,
    inner_axis: f64,
    outer_axis: f64,
    stellar_mass: f64,
) -> f64 {
    let m_sum = outer_mass + inner_mass;
    let a_sum = outer_axis + inner_axis;

    (m_sum / (3.0 * stellar_mass * MASS_RATIO_SUN_EARTH)).powf(1.0 / 3.0) * a_sum / 2.0
}
