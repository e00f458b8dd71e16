//! Property-based tests for the quantile model and its inverse
//!
//! Parameters are drawn from `B > 0`, `k >= 0`, where the transform is
//! increasing for every skewness in the sampled range.

use gandk_quantile::{
    BisectionConfig, DensityEvaluator, Error, GAndK, GkParams, InverseSolver, QuantileFunction,
    SolverMode,
};
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = GkParams> {
    (-10.0..10.0f64, 0.2..3.0f64, -1.5..1.5f64, 0.0..1.0f64)
        .prop_map(|(a, b, g, k)| GkParams::new(a, b, g, k))
}

proptest! {
    // Property: inverting Q(z) recovers z
    #[test]
    fn prop_round_trip(params in valid_params(), z in -5.0..5.0f64) {
        let model = GAndK::new(params);
        let solver = InverseSolver::new(BisectionConfig::default().with_tolerance(1e-10));
        let recovered = solver.invert(&model, model.quantile(z)).unwrap();
        prop_assert!((recovered - z).abs() < 1e-6,
            "z = {}, recovered = {}, params = {}", z, recovered, params);
    }

    // Property: Q is strictly increasing
    #[test]
    fn prop_monotone(params in valid_params(), z1 in -5.0..5.0f64, gap in 1e-3..3.0f64) {
        let model = GAndK::new(params);
        prop_assert!(model.quantile(z1) < model.quantile(z1 + gap));
        prop_assert!(model.derivative(z1) > 0.0);
    }

    // Property: with g = 0 the kernel is odd around A
    #[test]
    fn prop_symmetric_without_skew(
        a in -10.0..10.0f64,
        b in 0.2..3.0f64,
        k in -0.3..1.0f64,
        z in 0.0..5.0f64,
    ) {
        let model = GAndK::new(GkParams::new(a, b, 0.0, k));
        let upper = model.quantile(z) - a;
        let lower = model.quantile(-z) - a;
        prop_assert!((upper + lower).abs() <= 1e-9 * upper.abs().max(1.0));
    }

    // Property: the median equals the location parameter
    #[test]
    fn prop_median_is_location(params in valid_params()) {
        prop_assert_eq!(GAndK::new(params).quantile(0.0), params.a);
    }

    // Property: the density is non-negative inside the bracket image
    #[test]
    fn prop_density_non_negative(params in valid_params(), z in -4.5..4.5f64) {
        let eval = DensityEvaluator::for_params(params);
        let x = eval.model().quantile(z);
        let pdf = eval.density(x).unwrap();
        prop_assert!(pdf >= 0.0 && pdf.is_finite());
    }
}

#[test]
fn test_strict_mode_matches_best_effort_when_converged() {
    let model = GAndK::from_parts(3.0, 1.0, 2.0, 0.5);
    let best_effort = InverseSolver::default();
    let strict = InverseSolver::new(BisectionConfig::default().with_mode(SolverMode::Strict));
    for &z in &[-3.0, -0.5, 0.25, 2.0] {
        let x = model.quantile(z);
        assert_eq!(
            best_effort.invert(&model, x).unwrap(),
            strict.invert(&model, x).unwrap()
        );
    }
}

#[test]
fn test_strict_mode_rejects_non_monotone_parameters() {
    let model = GAndK::new(GkParams::new(0.0, 1.0, 0.0, -0.75));
    assert!(matches!(
        InverseSolver::strict().invert(&model, 0.5),
        Err(Error::Domain(_))
    ));
}

#[test]
fn test_narrow_bracket_excluding_root() {
    let model = GAndK::from_parts(0.0, 1.0, 0.0, 0.0);
    let config = BisectionConfig::default().with_bracket(1.0, 2.0);

    // Both endpoints positive: the low end keeps advancing toward `high`.
    let clamped = InverseSolver::new(config).invert(&model, -3.0).unwrap();
    assert!((clamped - 2.0).abs() < 1e-4);

    let err = InverseSolver::new(config.with_mode(SolverMode::Strict))
        .invert(&model, -3.0)
        .unwrap_err();
    assert!(err.is_solver_failure());
}
