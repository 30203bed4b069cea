mod tests {
    use approx::assert_relative_eq;

    use crate::constants::MASS_RATIO_SUN_EARTH;
    use crate::mass::Mass;

    #[test]
    fn test_mass_conversions() {
        let earth = Mass::from_earth_masses(1.0);
        assert_relative_eq!(earth.to_solar_masses(), 1.0 / MASS_RATIO_SUN_EARTH);
        assert_relative_eq!(earth.to_earth_masses(), 1.0);

        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_earth_masses(), 332948.6);
    }

    #[test]
    fn test_mass_serializes_as_solar_masses() {
        let json = serde_json::to_string(&Mass::from_solar_masses(0.8)).unwrap();
        assert_eq!(json, "0.8");
    }
}
