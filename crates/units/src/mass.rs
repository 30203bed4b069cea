use serde::{Deserialize, Serialize};

use crate::constants::MASS_RATIO_SUN_EARTH;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit. Earth masses convert through the fixed
/// ratio [`MASS_RATIO_SUN_EARTH`], which is what the architecture measures
/// are normalized by.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let star = Mass::from_solar_masses(0.8);
/// let planet = Mass::from_earth_masses(5.0);
///
/// let ratio = planet.to_solar_masses() / star.to_solar_masses();
/// assert!(ratio < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let sun = Mass::from_earth_masses(332948.6);
    /// assert_eq!(sun.to_solar_masses(), 1.0);
    /// ```
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / MASS_RATIO_SUN_EARTH)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * MASS_RATIO_SUN_EARTH
    }
}
