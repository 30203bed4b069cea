use serde::{Deserialize, Serialize};

use crate::constants::EARTH_YEAR_DAYS;

/// An orbital period or transit duration.
///
/// Days are the base unit, matching how catalogs report periods. Years are
/// Earth orbital periods ([`EARTH_YEAR_DAYS`]), not Julian years.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let period = Time::from_days(365.24);
/// assert_eq!(period.to_earth_years(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Days

impl Time {
    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in Earth orbital periods.
    pub fn from_earth_years(value: f64) -> Self {
        Self(value * EARTH_YEAR_DAYS)
    }

    pub fn to_days(&self) -> f64 {
        self.0
    }

    /// Converts to units of the Earth's orbital period.
    pub fn to_earth_years(&self) -> f64 {
        self.0 / EARTH_YEAR_DAYS
    }
}
