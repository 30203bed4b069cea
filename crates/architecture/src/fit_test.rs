mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::DVector;

    use crate::config::FitSettings;
    use crate::fit::{
        LeastSquaresSolver, MinpackSolver, ResidualFn, SolverOutcome, fit_inclination,
        fit_inclination_with,
    };
    use crate::transit::{TransitParameters, model_durations};

    const PERIODS: [f64; 3] = [5.2, 11.7, 23.9];
    const RADIUS_RATIOS: [f64; 3] = [0.01, 0.02, 0.015];

    fn params() -> TransitParameters<'static> {
        TransitParameters {
            periods: &PERIODS,
            rho: 0.8,
            radius_ratios: &RADIUS_RATIOS,
        }
    }

    /// Reports a fixed parameter vector without looking at the residuals
    struct FixedSolver(f64);

    impl LeastSquaresSolver for FixedSolver {
        fn minimize(&self, _initial: DVector<f64>, residuals: &ResidualFn<'_>) -> SolverOutcome {
            let params = DVector::from_element(1, self.0);
            let _ = residuals(&params);
            SolverOutcome {
                params,
                converged: false,
                status: "fixed".to_string(),
                evaluations: 1,
            }
        }
    }

    #[test]
    fn test_noiseless_face_on_fit() {
        let durations = model_durations(&params(), 0.0);
        let errors = [0.002; 3];

        let fit = fit_inclination(&params(), &durations, &errors);
        assert!(fit.converged, "fit should converge, got {}", fit.status);
        assert_abs_diff_eq!(fit.cos_inclination, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_solver_linear_problem() {
        // r(x) = [x0 - 3, 2 (x0 - 3)] has its minimum at x0 = 3
        let residuals = |x: &DVector<f64>| DVector::from_vec(vec![x[0] - 3.0, 2.0 * (x[0] - 3.0)]);

        let outcome = MinpackSolver::default().minimize(DVector::zeros(1), &residuals);
        assert!(outcome.converged, "status: {}", outcome.status);
        assert_abs_diff_eq!(outcome.params[0], 3.0, epsilon = 1e-6);
        assert!(outcome.evaluations > 0);
    }

    #[test]
    fn test_noiseless_inclined_fit() {
        for cos_i in [0.005, 0.01, 0.015] {
            let durations = model_durations(&params(), cos_i);

            for errors in [[0.002; 3], [0.0005, 0.001, 0.003]] {
                let fit = fit_inclination(&params(), &durations, &errors);
                assert!(fit.converged, "cos i = {cos_i}: {}", fit.status);
                assert_relative_eq!(fit.cos_inclination.abs(), cos_i, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn test_noisy_fit_finds_least_squares_minimum() {
        let noise = [0.003, -0.002, 0.001];
        let durations: Vec<f64> = model_durations(&params(), 0.008)
            .iter()
            .zip(noise)
            .map(|(d, e)| d + e)
            .collect();

        let fit = fit_inclination(&params(), &durations, &[0.002; 3]);
        assert!(fit.converged, "status: {}", fit.status);
        assert_relative_eq!(fit.cos_inclination.abs(), 0.007824340214869517, max_relative = 1e-6);
    }

    #[test]
    fn test_solver_steps_back_from_undefined_region() {
        // Newton's first step from 0 overshoots far into the NaN region x > 1
        let residuals = |x: &DVector<f64>| {
            let r = if x[0] <= 1.0 { x[0] * x[0] - 0.25 } else { f64::NAN };
            DVector::from_element(1, r)
        };

        let outcome = MinpackSolver::default().minimize(DVector::zeros(1), &residuals);
        assert!(outcome.converged, "status: {}", outcome.status);
        assert_abs_diff_eq!(outcome.params[0].abs(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_solver_tolerates_nan_residuals() {
        let residuals = |x: &DVector<f64>| DVector::from_element(3, x[0] * f64::NAN);

        let outcome = MinpackSolver::default().minimize(DVector::zeros(1), &residuals);
        assert!(!outcome.converged);
    }

    #[test]
    fn test_custom_solver_is_used() {
        let durations = model_durations(&params(), 0.0);
        let fit = fit_inclination_with(&FixedSolver(0.01), &params(), &durations, &[0.002; 3]);

        assert_eq!(fit.cos_inclination, 0.01);
        assert!(!fit.converged);
        assert_eq!(fit.status, "fixed");
    }

    #[test]
    fn test_solver_rejects_invalid_settings() {
        let settings = FitSettings {
            stepbound: 0.0,
            ..FitSettings::default()
        };
        assert!(MinpackSolver::new(settings).is_err());

        let solver = MinpackSolver::new(FitSettings::default()).unwrap();
        assert_eq!(solver.settings(), &FitSettings::default());
    }
}
