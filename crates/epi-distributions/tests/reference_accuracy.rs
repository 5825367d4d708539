//! Accuracy-envelope characterization against an independent implementation
//!
//! The crate's approximations are closed-form by design; these tests pin
//! down how far each one strays from reference values computed by `statrs`
//! (dev-dependency only). Tolerances here document the envelope rather than
//! chase it: if an approximation is improved the bounds can tighten, but a
//! regression past them is a behavior change.

use epi_core::ConfidenceLevel;
use epi_distributions::{chi_squared, fisher_f, normal, student_t};
use proptest::prelude::*;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

fn reference_normal() -> Normal {
    Normal::new(0.0, 1.0).unwrap()
}

#[test]
fn normal_cdf_absolute_error() {
    let reference = reference_normal();
    let mut z = -6.0;
    while z <= 6.0 {
        let diff = (normal::cdf(z) - reference.cdf(z)).abs();
        assert!(diff < 2e-7, "normal cdf off by {diff} at z={z}");
        z += 0.05;
    }
}

#[test]
fn normal_quantile_absolute_error() {
    let reference = reference_normal();
    for i in 1..999 {
        let p = i as f64 / 1000.0;
        let diff = (normal::quantile(p) - reference.inverse_cdf(p)).abs();
        assert!(diff < 1e-6, "normal quantile off by {diff} at p={p}");
    }
}

#[test]
fn t_critical_envelope() {
    for df in [5.0, 10.0, 20.0, 30.0, 60.0, 120.0, 480.0] {
        for level in [0.90, 0.95, 0.99] {
            let reference = StudentsT::new(0.0, 1.0, df)
                .unwrap()
                .inverse_cdf(1.0 - (1.0 - level) / 2.0);
            let approx = student_t::critical(ConfidenceLevel::new(level).unwrap(), df);
            let rel = (approx - reference).abs() / reference;
            let tol = if df < 10.0 {
                8e-3
            } else if df < 30.0 {
                2e-3
            } else {
                1e-3
            };
            assert!(
                rel < tol,
                "t critical rel err {rel:.2e} at df={df}, level={level}"
            );
        }
    }
}

#[test]
fn t_p_value_exact_for_integer_df() {
    // The trigonometric recursion is exact; only the normal CDF inside the
    // large-df fallback is approximate, so df <= 100 should agree tightly.
    for df in [1.0, 2.0, 3.0, 4.0, 7.0, 12.0, 25.0, 60.0, 100.0] {
        for t in [-4.0, -1.3, -0.2, 0.0, 0.8, 2.2, 5.0] {
            let reference = 1.0 - StudentsT::new(0.0, 1.0, df).unwrap().cdf(t);
            let approx = student_t::p_value(t, df).upper;
            assert!(
                (approx - reference).abs() < 1e-9,
                "t tail off at t={t}, df={df}"
            );
        }
    }
}

#[test]
fn chi_squared_critical_envelope() {
    for df in [2.0, 5.0, 10.0, 30.0, 100.0] {
        for p in [0.01, 0.025, 0.05, 0.5, 0.95, 0.975, 0.99] {
            let reference = ChiSquared::new(df).unwrap().inverse_cdf(1.0 - p);
            let approx = chi_squared::critical(p, df);
            // Relative accuracy degrades in the deep lower tail at small df;
            // the mixed bound keeps the check meaningful across the grid
            let bound = 0.03 * reference + 0.05;
            assert!(
                (approx - reference).abs() < bound,
                "chi2 critical off at p={p}, df={df}: {approx} vs {reference}"
            );
        }
    }
}

#[test]
fn f_critical_envelope() {
    // (p, d1, d2, relative tolerance) — the Paulson-type approximation is
    // only relied on for Clopper-Pearson bounds; small denominator df is
    // its weak spot and is documented as such
    let cases = [
        (0.05, 12.0, 10.0, 0.08),
        (0.025, 12.0, 10.0, 0.08),
        (0.05, 5.0, 30.0, 0.06),
        (0.025, 4.0, 18.0, 0.10),
        (0.05, 30.0, 60.0, 0.02),
        (0.01, 60.0, 120.0, 0.02),
        (0.025, 120.0, 240.0, 0.02),
    ];
    for (p, d1, d2, tol) in cases {
        let reference = FisherSnedecor::new(d1, d2).unwrap().inverse_cdf(1.0 - p);
        let approx = fisher_f::critical(p, d1, d2);
        let rel = (approx - reference).abs() / reference;
        assert!(
            rel < tol,
            "F critical rel err {rel:.3} at p={p}, d1={d1}, d2={d2}"
        );
    }
}

proptest! {
    #[test]
    fn chi_squared_round_trip(df in 2.0..100.0f64, p in 0.01..0.95f64) {
        let x = chi_squared::critical(p, df);
        let recovered = chi_squared::p_value(x, df);
        prop_assert!((recovered - p).abs() < 1e-2,
            "round trip p={p}, df={df} gave {recovered}");
    }

    #[test]
    fn normal_round_trip(p in 0.001..0.999f64) {
        let recovered = normal::cdf(normal::quantile(p));
        prop_assert!((recovered - p).abs() < 1e-6);
    }

    #[test]
    fn t_two_sided_matches_alpha(df in 5u32..100u32, level in 0.5..0.99f64) {
        // Integer df: the p-value recursion rounds fractional df, which
        // would otherwise be compared against a continuous-df quantile
        let df = df as f64;
        let t = student_t::critical(ConfidenceLevel::new(level).unwrap(), df);
        let p = student_t::p_value(t, df);
        prop_assert!((p.two_sided - (1.0 - level)).abs() < 5e-3,
            "two-sided p {} vs alpha {}", p.two_sided, 1.0 - level);
    }

    #[test]
    fn t_tails_are_complementary(t in -6.0..6.0f64, df in 1.0..200.0f64) {
        let p = student_t::p_value(t, df);
        prop_assert!(p.lower >= 0.0 && p.upper <= 1.0);
        prop_assert!((p.lower + p.upper - 1.0).abs() < 1e-9);
        prop_assert!((p.two_sided - 2.0 * p.lower.min(p.upper)).abs() < 1e-9);
    }
}
