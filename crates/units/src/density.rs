use std::f64::consts::PI;

/// Stellar density with M☉ R☉⁻³ as the base unit.
///
/// The transit model is written in solar masses and solar radii, so a
/// "solar density" of 1 is one solar mass per cubic solar radius, not the
/// Sun's mean density (which is `3/(4π)` ≈ 0.239 in these units). In SI
/// the unit is [`SOLAR_UNIT_DENSITY_KG_M3`](crate::constants::SOLAR_UNIT_DENSITY_KG_M3).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    /// Creates a new `Density` from a value in M☉ R☉⁻³.
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Density` from a multiple of the Sun's mean density.
    pub fn from_mean_solar(value: f64) -> Self {
        Self(value * 3.0 / (4.0 * PI))
    }

    pub fn to_solar(&self) -> f64 {
        self.0
    }
}
