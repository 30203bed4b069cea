//! System-level architecture measures (Gilbert & Fabrycky 2020).
//!
//! Every measure is a pure function of its inputs. Undefined values come back
//! as NaN; measures that can be undefined for small systems return a
//! [`Measured`] carrying the reason.

use lmc::{Complexity, Lmc};
use statrs::statistics::Statistics;
use units::Mass;

use crate::diagnostics::{Measured, Notice};
use crate::fit::{LeastSquaresSolver, MinpackSolver, fit_inclination_with};
use crate::kepler::{mutual_hill_radius, period_to_semimajor_axis};
use crate::stats::{argsort, spearman};
use crate::transit::{TransitParameters, calculate_flatness, model_durations};

/// Dynamical mass μ: total planet mass relative to the star.
///
/// # Arguments
///
/// * `masses` - Planet masses in Earth masses
/// * `stellar_mass` - Star mass in solar masses
///
/// # Examples
///
/// ```
/// use architecture::measures::dynamical_mass;
///
/// assert_eq!(dynamical_mass(&[], 1.0), 0.0);
/// ```
pub fn dynamical_mass(masses: &[f64], stellar_mass: f64) -> f64 {
    Mass::from_earth_masses(masses.iter().sum()).to_solar_masses() / stellar_mass
}

/// Mass partitioning Q: disequilibrium of the normalized mass distribution.
///
/// Scale-free, so masses may be in any unit. NaN when the masses sum to zero.
pub fn mass_partitioning(masses: &[f64]) -> f64 {
    mass_partitioning_with(&Lmc, masses)
}

pub fn mass_partitioning_with<C: Complexity + ?Sized>(complexity: &C, masses: &[f64]) -> f64 {
    let total: f64 = masses.iter().sum();
    let fractions: Vec<f64> = masses.iter().map(|m| m / total).collect();

    complexity.disequilibrium(&fractions)
}

/// Monotonicity M: Spearman correlation of period and mass, scaled by `Q^(1/N)`.
///
/// Follows the rank correlation's own semantics for tiny systems (NaN for a
/// single planet or equal masses). Mismatched lengths give NaN.
pub fn monotonicity(periods: &[f64], masses: &[f64]) -> f64 {
    monotonicity_with(&Lmc, periods, masses)
}

pub fn monotonicity_with<C: Complexity + ?Sized>(
    complexity: &C,
    periods: &[f64],
    masses: &[f64],
) -> f64 {
    if periods.len() != masses.len() {
        return f64::NAN;
    }
    let n = periods.len() as f64;
    let rho = spearman(periods, masses);
    let q = mass_partitioning_with(complexity, masses);

    rho * q.powf(1.0 / n)
}

/// Characteristic spacing S: mean separation of adjacent planets in mutual
/// Hill radii.
///
/// Planets are ordered by period first, so the input order does not matter.
/// Undefined for fewer than two planets.
///
/// # Arguments
///
/// * `periods` - Orbital periods in days
/// * `masses` - Planet masses in Earth masses, one per period
/// * `stellar_mass` - Star mass in solar masses
/// * `warn` - Also log the notice when the measure is undefined
pub fn characteristic_spacing(
    periods: &[f64],
    masses: &[f64],
    stellar_mass: f64,
    warn: bool,
) -> Measured {
    const MEASURE: &str = "characteristic spacing";

    if periods.len() < 2 {
        return Measured::undefined(
            Notice::TooFewPlanets {
                measure: MEASURE,
                required: 2,
                found: periods.len(),
            },
            warn,
        );
    }
    if masses.len() != periods.len() {
        return Measured::undefined(
            Notice::LengthMismatch {
                measure: MEASURE,
                expected: periods.len(),
                found: masses.len(),
            },
            warn,
        );
    }

    let order = argsort(periods);
    let sorted_periods: Vec<f64> = order.iter().map(|&i| periods[i]).collect();
    let axes = period_to_semimajor_axis(&sorted_periods, stellar_mass);

    let spacings: Vec<f64> = order
        .windows(2)
        .zip(axes.windows(2))
        .map(|(pair, a)| {
            let radius_h =
                mutual_hill_radius(masses[pair[0]], masses[pair[1]], a[0], a[1], stellar_mass);
            (a[1] - a[0]) / radius_h
        })
        .collect();

    Measured::defined(spacings.mean())
}

/// Gap complexity C: LMC complexity of the fractional log-period gaps.
///
/// Periods may be in any unit. Undefined for fewer than three planets.
pub fn gap_complexity(periods: &[f64], warn: bool) -> Measured {
    gap_complexity_with(&Lmc, periods, warn)
}

pub fn gap_complexity_with<C: Complexity + ?Sized>(
    complexity: &C,
    periods: &[f64],
    warn: bool,
) -> Measured {
    if periods.len() < 3 {
        return Measured::undefined(
            Notice::TooFewPlanets {
                measure: "gap complexity",
                required: 3,
                found: periods.len(),
            },
            warn,
        );
    }

    let mut sorted = periods.to_vec();
    sorted.sort_by(f64::total_cmp);

    let span = (sorted[sorted.len() - 1] / sorted[0]).ln();
    let gaps: Vec<f64> = sorted.windows(2).map(|p| (p[1] / p[0]).ln() / span).collect();

    Measured::defined(complexity.complexity(&gaps))
}

/// Flatness f: scatter of transit durations around the best-fit circular,
/// coplanar model.
///
/// Durations and errors are in days. Fits a shared `cos i` starting face-on
/// and evaluates [`calculate_flatness`] at the fit. A fit that does not
/// converge still yields a value (possibly NaN) plus a
/// [`Notice::FitNotConverged`]; nothing is logged at warning level.
///
/// # Arguments
///
/// * `periods` - Orbital periods in days
/// * `stellar_density` - Stellar density in solar density units
/// * `radius_ratios` - Planet-to-star radius ratios, one per period
/// * `durations`, `errors` - Observed transit durations and 1σ errors
pub fn flatness(
    periods: &[f64],
    stellar_density: f64,
    radius_ratios: &[f64],
    durations: &[f64],
    errors: &[f64],
) -> Measured {
    flatness_with(
        &MinpackSolver::default(),
        periods,
        stellar_density,
        radius_ratios,
        durations,
        errors,
    )
}

pub fn flatness_with<S: LeastSquaresSolver + ?Sized>(
    solver: &S,
    periods: &[f64],
    stellar_density: f64,
    radius_ratios: &[f64],
    durations: &[f64],
    errors: &[f64],
) -> Measured {
    if let Some(found) = [radius_ratios.len(), durations.len(), errors.len()]
        .into_iter()
        .find(|&len| len != periods.len())
    {
        return Measured::undefined(
            Notice::LengthMismatch {
                measure: "flatness",
                expected: periods.len(),
                found,
            },
            false,
        );
    }

    let params = TransitParameters {
        periods,
        rho: stellar_density,
        radius_ratios,
    };
    let fit = fit_inclination_with(solver, &params, durations, errors);
    let model = model_durations(&params, fit.cos_inclination);
    let measured = Measured::defined(calculate_flatness(durations, &model));

    if fit.converged {
        measured
    } else {
        measured.with_notice(Notice::FitNotConverged { status: fit.status }, false)
    }
}
