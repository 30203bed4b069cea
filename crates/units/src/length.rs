use serde::{Deserialize, Serialize};

use crate::constants::EARTH_SEMIMAJOR_AXIS_SOLAR_RADII;

/// A physical length quantity using f64 precision.
///
/// Solar radii are the base unit; orbital distances in the transit model are
/// measured in stellar radii. One AU is [`EARTH_SEMIMAJOR_AXIS_SOLAR_RADII`].
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// assert_eq!(orbit.to_solar_radii(), 215.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: Solar radii

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(EARTH_SEMIMAJOR_AXIS_SOLAR_RADII * value)
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0
    }

    pub fn to_au(&self) -> f64 {
        self.0 / EARTH_SEMIMAJOR_AXIS_SOLAR_RADII
    }
}
