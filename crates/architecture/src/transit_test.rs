mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use units::G_NORMALIZED;

    use crate::transit::{
        TransitParameters, calculate_duration, calculate_flatness, model_durations,
        residuals_for_duration_fit,
    };

    #[test]
    fn test_central_transit_duration() {
        for (period, rho, rprs) in [(10.0, 1.0, 0.02), (3.5, 0.4, 0.1), (200.0, 2.5, 0.005)] {
            let scale = (3.0 * period / (G_NORMALIZED * rho * PI * PI)).powf(1.0 / 3.0);
            let central = scale * (1.0 + rprs);
            assert_relative_eq!(
                calculate_duration(period, rho, rprs, 0.0),
                central,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_duration_values() {
        assert_relative_eq!(
            calculate_duration(10.0, 1.0, 0.02, 0.0),
            0.10314292546932569,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            calculate_duration(10.0, 1.0, 0.02, 0.02),
            0.08115180668769713,
            max_relative = 1e-12
        );

        // Earth across a unit-density star, in hours
        assert_relative_eq!(
            calculate_duration(365.24, 1.0, 0.0, 0.0) * 24.0,
            8.052114834355612,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_duration_shrinks_with_impact_parameter() {
        let face_on = calculate_duration(10.0, 1.0, 0.02, 0.0);
        let inclined = calculate_duration(10.0, 1.0, 0.02, 0.01);
        assert!(inclined < face_on);

        // Symmetric in cos i
        assert_relative_eq!(inclined, calculate_duration(10.0, 1.0, 0.02, -0.01));
    }

    #[test]
    fn test_non_transiting_geometry_is_nan() {
        assert!(calculate_duration(10.0, 1.0, 0.02, 0.5).is_nan());
    }

    #[test]
    fn test_residuals_are_error_scaled() {
        let periods = [10.0, 20.0];
        let radius_ratios = [0.02, 0.03];
        let params = TransitParameters {
            periods: &periods,
            rho: 1.0,
            radius_ratios: &radius_ratios,
        };

        let model = model_durations(&params, 0.0);
        let durations = [model[0] + 0.01, model[1] - 0.02];
        let errors = [0.005, 0.01];

        let residuals = residuals_for_duration_fit(0.0, &params, &durations, &errors);
        assert_relative_eq!(residuals[0], 2.0, max_relative = 1e-9);
        assert_relative_eq!(residuals[1], -2.0, max_relative = 1e-9);
    }

    #[test]
    fn test_flatness_statistic() {
        let durations = [0.1, 0.2, 0.3];
        assert_abs_diff_eq!(calculate_flatness(&durations, &durations), 0.0);

        // std([0.1, -0.1]) = 0.1, rms = 1
        assert_relative_eq!(
            calculate_flatness(&[1.0, 1.0], &[0.9, 1.1]),
            0.1,
            max_relative = 1e-12
        );

        // A constant offset has no scatter
        assert_abs_diff_eq!(
            calculate_flatness(&[1.0, 2.0], &[0.5, 1.5]),
            0.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_flatness_degenerate_durations() {
        assert!(calculate_flatness(&[0.0, 0.0], &[0.0, 0.0]).is_nan());
        assert!(calculate_flatness(&[0.0, 0.0], &[1.0, 0.0]).is_infinite());
        assert!(calculate_flatness(&[], &[]).is_nan());
    }
}
