pub mod constants;
pub mod density;
pub mod length;
pub mod mass;
pub mod time;

#[cfg(test)]
mod mass_test;

pub use constants::{
    BIG_G, EARTH_SEMIMAJOR_AXIS_SOLAR_RADII, EARTH_YEAR_DAYS, G_NORMALIZED, M_SUN,
    MASS_RATIO_SUN_EARTH, R_SUN, SECONDS_PER_DAY, SOLAR_UNIT_DENSITY_KG_M3,
};
pub use density::Density;
pub use length::Length;
pub use mass::Mass;
pub use time::Time;
