mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::complexity::{Complexity, Lmc};

    #[test]
    fn test_uniform_distribution() {
        for n in 2..10 {
            let p = vec![1.0 / n as f64; n];
            assert_relative_eq!(Lmc.entropy(&p), 1.0, max_relative = 1e-12);
            assert_relative_eq!(Lmc.disequilibrium(&p), 0.0, epsilon = 1e-15);
            assert_relative_eq!(Lmc.complexity(&p), 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_delta_distribution() {
        // All weight in one entry: no entropy, maximal disequilibrium
        let p = [0.0, 1.0, 0.0];
        assert_eq!(Lmc.entropy(&p), 0.0);
        assert_relative_eq!(Lmc.disequilibrium(&p), 1.0, max_relative = 1e-12);
        assert_eq!(Lmc.complexity(&p), 0.0);
    }

    #[test]
    fn test_two_entry_values() {
        let p = [0.25, 0.75];

        // D = 2 * (0.25² + 0.25²) = 0.25
        assert_relative_eq!(Lmc.disequilibrium(&p), 0.25, max_relative = 1e-12);

        let h = -(0.25_f64 * 0.25_f64.ln() + 0.75 * 0.75_f64.ln()) / 2.0_f64.ln();
        assert_relative_eq!(Lmc.entropy(&p), h, max_relative = 1e-12);
        assert_relative_eq!(Lmc.complexity(&p), 0.25 * h, max_relative = 1e-12);
    }

    #[test]
    fn test_single_entry_is_undefined() {
        assert!(Lmc.disequilibrium(&[1.0]).is_nan());
        assert!(Lmc.complexity(&[1.0]).is_nan());
    }

    #[test]
    fn test_trait_object_backend() {
        let backend: &dyn Complexity = &Lmc;
        assert_relative_eq!(backend.disequilibrium(&[0.5, 0.5]), 0.0);
    }

    proptest! {
        #[test]
        fn statistics_stay_in_unit_interval(weights in prop::collection::vec(0.01f64..100.0, 2..12)) {
            let total: f64 = weights.iter().sum();
            let p: Vec<f64> = weights.iter().map(|w| w / total).collect();

            let d = Lmc.disequilibrium(&p);
            let c = Lmc.complexity(&p);
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&d));
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&c));
        }
    }
}
