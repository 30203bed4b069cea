//! Observed planetary systems and their full set of architecture measures.

use lmc::{Complexity, Lmc};
use serde::{Deserialize, Serialize};
use units::{Density, Mass, Time};

use crate::config::MeasureOptions;
use crate::diagnostics::Measured;
use crate::error::{ArchitectureError, Result, ensure_positive};
use crate::fit::{LeastSquaresSolver, MinpackSolver};
use crate::measures;

/// Host star parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarParameters {
    pub mass: Mass,
    pub density: Density,
}

impl StellarParameters {
    pub fn new(mass: Mass, density: Density) -> Self {
        Self { mass, density }
    }

    /// A Sun-like host: one solar mass at solar density
    pub fn solar() -> Self {
        Self::new(Mass::from_solar_masses(1.0), Density::from_solar(1.0))
    }
}

/// A measured transit duration and its 1σ error
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitDuration {
    pub duration: Time,
    pub error: Time,
}

/// Observables for one planet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub period: Time,
    pub mass: Mass,
    /// Planet-to-star radius ratio
    pub radius_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit: Option<TransitDuration>,
}

impl Planet {
    pub fn new(period: Time, mass: Mass, radius_ratio: f64) -> Self {
        Self {
            period,
            mass,
            radius_ratio,
            transit: None,
        }
    }

    pub fn with_transit(mut self, duration: Time, error: Time) -> Self {
        self.transit = Some(TransitDuration { duration, error });
        self
    }
}

/// A single-star system with one or more observed planets.
///
/// Planets keep the order they were given in; measures that need period
/// order sort internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetarySystem {
    pub star: StellarParameters,
    pub planets: Vec<Planet>,
}

impl PlanetarySystem {
    /// Create a system, rejecting non-finite or non-positive observables.
    pub fn new(star: StellarParameters, planets: Vec<Planet>) -> Result<Self> {
        ensure_positive("stellar mass", None, star.mass.to_solar_masses())?;
        ensure_positive("stellar density", None, star.density.to_solar())?;

        for (index, planet) in planets.iter().enumerate() {
            let index = Some(index);
            ensure_positive("period", index, planet.period.to_days())?;
            ensure_positive("mass", index, planet.mass.to_earth_masses())?;
            ensure_positive("radius ratio", index, planet.radius_ratio)?;
            if let Some(transit) = planet.transit {
                ensure_positive("transit duration", index, transit.duration.to_days())?;
                ensure_positive("transit duration error", index, transit.error.to_days())?;
            }
        }

        Ok(Self { star, planets })
    }

    /// Build a system from parallel columns.
    ///
    /// # Arguments
    ///
    /// * `periods` - Orbital periods in days
    /// * `masses` - Planet masses in Earth masses
    /// * `radius_ratios` - Planet-to-star radius ratios
    pub fn from_columns(
        star: StellarParameters,
        periods: &[f64],
        masses: &[f64],
        radius_ratios: &[f64],
    ) -> Result<Self> {
        check_column("masses", periods.len(), masses.len())?;
        check_column("radius ratios", periods.len(), radius_ratios.len())?;

        let planets = periods
            .iter()
            .zip(masses)
            .zip(radius_ratios)
            .map(|((&period, &mass), &rprs)| {
                Planet::new(Time::from_days(period), Mass::from_earth_masses(mass), rprs)
            })
            .collect();

        Self::new(star, planets)
    }

    /// Attach transit durations and errors (days), one per planet in order.
    pub fn with_transit_durations(mut self, durations: &[f64], errors: &[f64]) -> Result<Self> {
        check_column("transit durations", self.planets.len(), durations.len())?;
        check_column("transit duration errors", self.planets.len(), errors.len())?;

        let columns = durations.iter().zip(errors);
        for (planet, (&duration, &error)) in self.planets.iter_mut().zip(columns) {
            *planet = planet.with_transit(Time::from_days(duration), Time::from_days(error));
        }

        Self::new(self.star, self.planets)
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Orbital periods in days
    pub fn periods(&self) -> Vec<f64> {
        self.planets.iter().map(|p| p.period.to_days()).collect()
    }

    /// Planet masses in Earth masses
    pub fn masses(&self) -> Vec<f64> {
        self.planets.iter().map(|p| p.mass.to_earth_masses()).collect()
    }

    pub fn radius_ratios(&self) -> Vec<f64> {
        self.planets.iter().map(|p| p.radius_ratio).collect()
    }

    /// Durations and errors in days, if every planet has a measured transit.
    pub fn transit_columns(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        self.planets
            .iter()
            .map(|p| p.transit.map(|t| (t.duration.to_days(), t.error.to_days())))
            .collect::<Option<Vec<_>>>()
            .map(|pairs| pairs.into_iter().unzip())
    }
}

fn check_column(field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ArchitectureError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// All six architecture measures for one system.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureMeasures {
    pub dynamical_mass: f64,
    pub mass_partitioning: f64,
    pub monotonicity: f64,
    pub characteristic_spacing: Measured,
    pub gap_complexity: Measured,
    /// `None` unless every planet has a measured transit duration
    pub flatness: Option<Measured>,
}

impl ArchitectureMeasures {
    /// Compute every measure with the default LMC backend and MINPACK solver.
    pub fn for_system(system: &PlanetarySystem, options: &MeasureOptions) -> Result<Self> {
        options.validate()?;
        let solver = MinpackSolver::new(options.fit)?;

        Ok(Self::for_system_with(system, options.warn, &Lmc, &solver))
    }

    pub fn for_system_with<C, S>(
        system: &PlanetarySystem,
        warn: bool,
        complexity: &C,
        solver: &S,
    ) -> Self
    where
        C: Complexity + ?Sized,
        S: LeastSquaresSolver + ?Sized,
    {
        let periods = system.periods();
        let masses = system.masses();
        let stellar_mass = system.star.mass.to_solar_masses();

        let flatness = system.transit_columns().map(|(durations, errors)| {
            measures::flatness_with(
                solver,
                &periods,
                system.star.density.to_solar(),
                &system.radius_ratios(),
                &durations,
                &errors,
            )
        });

        Self {
            dynamical_mass: measures::dynamical_mass(&masses, stellar_mass),
            mass_partitioning: measures::mass_partitioning_with(complexity, &masses),
            monotonicity: measures::monotonicity_with(complexity, &periods, &masses),
            characteristic_spacing: measures::characteristic_spacing(
                &periods,
                &masses,
                stellar_mass,
                warn,
            ),
            gap_complexity: measures::gap_complexity_with(complexity, &periods, warn),
            flatness,
        }
    }
}
