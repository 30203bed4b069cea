//! Circular-orbit transit duration model.

use std::f64::consts::PI;

use statrs::statistics::Statistics;
use units::G_NORMALIZED;

/// Quantities held fixed while fitting the inclination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitParameters<'a> {
    /// Orbital periods (days)
    pub periods: &'a [f64],
    /// Stellar density (solar density)
    pub rho: f64,
    /// Planet-to-star radius ratios, one per period
    pub radius_ratios: &'a [f64],
}

/// Transit duration (days) of a planet on a circular orbit.
///
/// `(3P / (Gρπ²))^(1/3) · sqrt((1 + k)² − (Gρ/3π)^(2/3) P^(4/3) cos²i)`
///
/// The radicand goes negative for non-transiting geometry; the result is
/// then NaN rather than a panic.
///
/// # Arguments
///
/// * `period` - Orbital period in days
/// * `rho` - Stellar density in solar density units
/// * `rprs` - Planet-to-star radius ratio
/// * `cos_inclination` - Cosine of the orbital inclination (0 is a central transit)
pub fn calculate_duration(period: f64, rho: f64, rprs: f64, cos_inclination: f64) -> f64 {
    let term3 = ((3.0 * period) / (G_NORMALIZED * rho * PI.powi(2))).powf(1.0 / 3.0);
    let term2a = (1.0 + rprs).powi(2);
    let term2b = ((G_NORMALIZED * rho) / (3.0 * PI)).powf(2.0 / 3.0);
    let term2c = period.powf(4.0 / 3.0) * cos_inclination.powi(2);
    let term2 = (term2a - term2b * term2c).sqrt();

    term3 * term2
}

/// Model durations for every planet at a shared inclination.
pub fn model_durations(params: &TransitParameters<'_>, cos_inclination: f64) -> Vec<f64> {
    params
        .periods
        .iter()
        .zip(params.radius_ratios)
        .map(|(&period, &rprs)| calculate_duration(period, params.rho, rprs, cos_inclination))
        .collect()
}

/// Error-scaled residuals `(observed − model) / error` for the duration fit.
pub fn residuals_for_duration_fit(
    cos_inclination: f64,
    params: &TransitParameters<'_>,
    durations: &[f64],
    errors: &[f64],
) -> Vec<f64> {
    model_durations(params, cos_inclination)
        .into_iter()
        .zip(durations.iter().zip(errors))
        .map(|(model, (&observed, &error))| (observed - model) / error)
        .collect()
}

/// Scatter of observed durations around the model, normalized by their RMS.
///
/// `std(observed − model) / sqrt(mean(observed²))` with the population
/// standard deviation. All-zero durations give Inf or NaN.
pub fn calculate_flatness(durations: &[f64], model: &[f64]) -> f64 {
    let scatter = durations.iter().zip(model).map(|(d, m)| d - m);
    let squares = durations.iter().map(|d| d * d);

    scatter.population_std_dev() / squares.mean().sqrt()
}
