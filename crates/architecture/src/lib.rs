//! Architecture measures for multi-planet systems.
//!
//! Closed-form statistics describing how planets are arranged around a single
//! star: dynamical mass, mass partitioning, monotonicity, characteristic
//! spacing, gap complexity and flatness (Gilbert & Fabrycky 2020).
//!
//! Measures never fail. Inputs that leave a measure undefined produce NaN,
//! together with a [`Notice`] for the measures that carry one.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fit;
pub mod kepler;
pub mod measures;
pub mod stats;
pub mod system;
pub mod transit;

#[cfg(test)]
mod fit_test;
#[cfg(test)]
mod transit_test;

// Re-export main types at crate root
pub use config::{FitSettings, MeasureOptions};
pub use diagnostics::{Measured, Notice};
pub use error::ArchitectureError;
pub use fit::{FitResult, LeastSquaresSolver, MinpackSolver, SolverOutcome};
pub use system::{ArchitectureMeasures, Planet, PlanetarySystem, StellarParameters};
pub use transit::TransitParameters;

pub use measures::{
    characteristic_spacing, dynamical_mass, flatness, gap_complexity, mass_partitioning,
    monotonicity,
};

// Re-export the complexity backend for convenience
pub use lmc::{Complexity, Lmc};
