//! Structural properties of the solvers over randomized designs

use epi_power::{power_two_proportions, two_means, two_proportions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sample_size_is_positive_and_total_consistent(
        p1 in 0.05..0.45f64, gap in 0.1..0.4f64, power in 0.5..0.95f64,
    ) {
        let p2 = p1 + gap;
        let size = two_proportions(p1, p2, 0.05, power, 1.0).unwrap();
        prop_assert!(size.n >= 1);
        prop_assert_eq!(size.n_total, Some(2 * size.n));
    }

    #[test]
    fn solved_size_achieves_target_power(
        p1 in 0.05..0.4f64, gap in 0.15..0.4f64, power in 0.5..0.9f64,
    ) {
        let p2 = p1 + gap;
        let size = two_proportions(p1, p2, 0.05, power, 1.0).unwrap();
        let achieved = power_two_proportions(p1, p2, size.n, 1.0, 0.05).unwrap();
        // The solver's pooled null variance is slightly more conservative
        // than the unpooled evaluation, so allow a small shortfall
        prop_assert!(achieved > power - 0.02,
            "n={} achieved {} for target {}", size.n, achieved, power);
    }

    #[test]
    fn power_is_monotone_in_n(
        p1 in 0.1..0.4f64, gap in 0.1..0.3f64, n in 10u64..500,
    ) {
        let p2 = p1 + gap;
        let smaller = power_two_proportions(p1, p2, n, 1.0, 0.05).unwrap();
        let larger = power_two_proportions(p1, p2, n + 50, 1.0, 0.05).unwrap();
        prop_assert!(larger >= smaller - 1e-12);
    }

    #[test]
    fn mean_sample_size_shrinks_with_effect(
        sd in 1.0..20.0f64, delta in 0.5..5.0f64,
    ) {
        let base = two_means(sd, sd, delta, 0.05, 0.8, 1.0).unwrap();
        let bigger_effect = two_means(sd, sd, delta * 2.0, 0.05, 0.8, 1.0).unwrap();
        prop_assert!(bigger_effect.n <= base.n);
    }
}
