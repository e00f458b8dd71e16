//! Density of a quantile-defined distribution
//!
//! For `x = Q(z)` with `z` standard normal, the change of variables gives
//! `f(x) = φ(z) / Q'(z)` where `z = Q⁻¹(x)` is found numerically.

use gandk_core::math::distributions::normal;
use gandk_core::{GkParams, QuantileFunction, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::model::GAndK;
use crate::solver::{BisectionConfig, InverseSolver};

/// Evaluates densities of a quantile-defined model
///
/// Degenerate points (zero derivative, failed bracketing in best-effort
/// mode) propagate as NaN or ±∞ rather than errors. In strict mode solver
/// failures are returned as errors.
#[derive(Debug, Clone)]
pub struct DensityEvaluator<Q = GAndK> {
    model: Q,
    solver: InverseSolver,
}

impl<Q: QuantileFunction> DensityEvaluator<Q> {
    /// Create an evaluator with the default best-effort solver
    pub fn new(model: Q) -> Self {
        Self::with_solver(model, InverseSolver::default())
    }

    /// Create an evaluator with an explicit solver
    ///
    /// The solver is always run on the z-scale regardless of its configured
    /// output scale.
    pub fn with_solver(model: Q, solver: InverseSolver) -> Self {
        Self {
            model,
            solver: solver.z_scale(),
        }
    }

    pub fn model(&self) -> &Q {
        &self.model
    }

    pub fn solver(&self) -> &InverseSolver {
        &self.solver
    }

    /// Density at `x`
    pub fn density(&self, x: f64) -> Result<f64> {
        let z = self.solver.invert(&self.model, x)?;
        Ok(normal::pdf(z) / self.model.derivative(z))
    }

    /// Log density at `x`
    pub fn log_density(&self, x: f64) -> Result<f64> {
        let z = self.solver.invert(&self.model, x)?;
        Ok(normal::ln_pdf(z) - self.model.derivative(z).ln())
    }

    /// Densities at several points
    pub fn densities(&self, xs: &[f64]) -> Result<Vec<f64>> {
        #[cfg(feature = "parallel")]
        {
            xs.par_iter().map(|&x| self.density(x)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            xs.iter().map(|&x| self.density(x)).collect()
        }
    }

    /// Log-likelihood of an i.i.d. sample
    pub fn log_likelihood(&self, sample: &[f64]) -> Result<f64> {
        #[cfg(feature = "parallel")]
        let terms: Result<Vec<f64>> = sample.par_iter().map(|&x| self.log_density(x)).collect();
        #[cfg(not(feature = "parallel"))]
        let terms: Result<Vec<f64>> = sample.iter().map(|&x| self.log_density(x)).collect();

        let total = terms?.iter().sum::<f64>();
        if !total.is_finite() {
            debug!(n = sample.len(), total, "non-finite log-likelihood");
        }
        Ok(total)
    }
}

impl DensityEvaluator<GAndK> {
    /// Evaluator for a g-and-k parameter set
    pub fn for_params(params: GkParams) -> Self {
        Self::new(GAndK::new(params))
    }
}

/// g-and-k density at `x` with the given solver settings
pub fn density(x: f64, params: &GkParams, config: &BisectionConfig) -> Result<f64> {
    DensityEvaluator::with_solver(GAndK::new(*params), InverseSolver::new(*config)).density(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{OutputScale, SolverMode};
    use approx::assert_relative_eq;
    use gandk_core::Error;

    fn fixture() -> DensityEvaluator {
        DensityEvaluator::for_params(GkParams::new(3.0, 1.0, 2.0, 0.5))
    }

    #[test]
    fn test_density_at_median() {
        // z = 0 exactly, Q'(0) = B, so f(A) = φ(0) / B
        assert_relative_eq!(
            fixture().density(3.0).unwrap(),
            0.398_942_280_401_432_7,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_density_known_values() {
        let eval = fixture();
        let x = eval.model().quantile_at_probability(0.25);
        assert_relative_eq!(eval.density(x).unwrap(), 0.769_879_679_938_999, max_relative = 1e-4);
    }

    #[test]
    fn test_standard_normal_special_case() {
        // A=0, B=1, g=0, k=0 is the standard normal.
        let eval = DensityEvaluator::for_params(GkParams::new(0.0, 1.0, 0.0, 0.0));
        for &x in &[-2.0, -0.5, 0.0, 1.0, 3.0] {
            assert_relative_eq!(eval.density(x).unwrap(), normal::pdf(x), max_relative = 1e-4);
        }
    }

    #[test]
    fn test_density_integrates_to_one() {
        let eval = fixture();
        let (lo, hi) = (eval.model().quantile(-5.0), eval.model().quantile(5.0));
        let n = 20_000;
        let h = (hi - lo) / n as f64;
        let total: f64 = (0..n)
            .map(|i| eval.density(lo + (i as f64 + 0.5) * h).unwrap() * h)
            .sum();
        assert!((total - 1.0).abs() < 1e-3, "integral = {total}");
    }

    #[test]
    fn test_log_density_consistent() {
        let eval = fixture();
        for &x in &[2.0, 3.0, 4.5, 10.0] {
            assert_relative_eq!(
                eval.log_density(x).unwrap(),
                eval.density(x).unwrap().ln(),
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn test_log_likelihood_sums() {
        let eval = fixture();
        let sample = [2.5, 3.0, 3.7, 8.0];
        let expected: f64 = sample.iter().map(|&x| eval.log_density(x).unwrap()).sum();
        assert_relative_eq!(eval.log_likelihood(&sample).unwrap(), expected, epsilon = 1e-12);
        assert_eq!(eval.densities(&sample).unwrap().len(), 4);
    }

    #[test]
    fn test_solver_scale_is_forced_to_z() {
        let solver = InverseSolver::new(BisectionConfig::default().with_scale(OutputScale::Probability));
        let eval = DensityEvaluator::with_solver(GAndK::from_parts(3.0, 1.0, 2.0, 0.5), solver);
        assert_eq!(eval.solver().config().scale, OutputScale::ZScore);
        assert_relative_eq!(eval.density(3.0).unwrap(), normal::pdf(0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_strict_propagates_bracketing() {
        let config = BisectionConfig::default().with_mode(SolverMode::Strict);
        let err = density(1e6, &GkParams::new(3.0, 1.0, 2.0, 0.5), &config).unwrap_err();
        assert!(matches!(err, Error::Bracketing { .. }));

        // Best effort clamps to the bracket edge and still returns a number.
        let value = density(1e6, &GkParams::new(3.0, 1.0, 2.0, 0.5), &BisectionConfig::default())
            .unwrap();
        assert!(value.is_finite() && value >= 0.0);
    }
}
