//! Asymptotic sampling variance of order statistics
//!
//! For a sample of size `n` from a density `f`, the `p`-th sample quantile
//! is asymptotically normal around `x_p = Q(Φ⁻¹(p))` with variance
//!
//! ```text
//! Var = p(1 - p) / (n · f(x_p)²)
//! ```
//!
//! and two sample quantiles `p_i ≤ p_j` have covariance
//! `p_i(1 - p_j) / (n · f(x_i) · f(x_j))`.

use gandk_core::math::distributions::normal;
use gandk_core::{check_open_probability, Error, GkParams, QuantileFunction, Result};
use gandk_quantile::{DensityEvaluator, GAndK, InverseSolver};
use nalgebra::DMatrix;

use crate::octiles::OCTILE_PROBABILITIES;
use crate::types::{ConfidenceInterval, ConfidenceLevel};

/// Large-sample variance of sample quantiles under a quantile-defined model
#[derive(Debug, Clone)]
pub struct OrderStatisticVariance<Q = GAndK> {
    density: DensityEvaluator<Q>,
}

impl<Q: QuantileFunction> OrderStatisticVariance<Q> {
    /// Create with the default best-effort solver
    pub fn new(model: Q) -> Self {
        Self {
            density: DensityEvaluator::new(model),
        }
    }

    /// Create with an explicit solver; a strict solver also enables input
    /// validation here
    pub fn with_solver(model: Q, solver: InverseSolver) -> Self {
        Self {
            density: DensityEvaluator::with_solver(model, solver),
        }
    }

    pub fn model(&self) -> &Q {
        self.density.model()
    }

    fn is_strict(&self) -> bool {
        self.density.solver().is_strict()
    }

    fn check_inputs(&self, p: f64, n_obs: usize) -> Result<()> {
        if self.is_strict() {
            check_open_probability(p)?;
            if n_obs == 0 {
                return Err(Error::Domain("Sample size must be positive".to_string()));
            }
        }
        Ok(())
    }

    /// Model density at the `p`-th population quantile
    pub fn density_at_probability(&self, p: f64) -> Result<f64> {
        let x = self.model().quantile_at_probability(p);
        self.density.density(x)
    }

    /// Asymptotic variance of the `p`-th sample quantile for `n_obs`
    /// observations
    pub fn variance(&self, p: f64, n_obs: usize) -> Result<f64> {
        self.check_inputs(p, n_obs)?;
        let f = self.density_at_probability(p)?;
        Ok(p * (1.0 - p) / (n_obs as f64 * f * f))
    }

    /// Asymptotic standard error of the `p`-th sample quantile
    pub fn standard_error(&self, p: f64, n_obs: usize) -> Result<f64> {
        self.variance(p, n_obs).map(f64::sqrt)
    }

    /// Variances at several probabilities
    pub fn variances(&self, probabilities: &[f64], n_obs: usize) -> Result<Vec<f64>> {
        probabilities
            .iter()
            .map(|&p| self.variance(p, n_obs))
            .collect()
    }

    /// Variances of the seven octiles
    pub fn octile_variances(&self, n_obs: usize) -> Result<[f64; 7]> {
        let mut out = [0.0; 7];
        for (slot, &p) in out.iter_mut().zip(OCTILE_PROBABILITIES.iter()) {
            *slot = self.variance(p, n_obs)?;
        }
        Ok(out)
    }

    /// Joint asymptotic covariance of the sample quantiles at `probabilities`
    pub fn covariance(&self, probabilities: &[f64], n_obs: usize) -> Result<DMatrix<f64>> {
        let densities = probabilities
            .iter()
            .map(|&p| {
                self.check_inputs(p, n_obs)?;
                self.density_at_probability(p)
            })
            .collect::<Result<Vec<f64>>>()?;

        let n = n_obs as f64;
        let m = probabilities.len();
        Ok(DMatrix::from_fn(m, m, |i, j| {
            let (p_lo, p_hi) = if probabilities[i] <= probabilities[j] {
                (probabilities[i], probabilities[j])
            } else {
                (probabilities[j], probabilities[i])
            };
            p_lo * (1.0 - p_hi) / (n * (densities[i] * densities[j]))
        }))
    }

    /// Covariance of the seven octiles
    pub fn octile_covariance(&self, n_obs: usize) -> Result<DMatrix<f64>> {
        self.covariance(&OCTILE_PROBABILITIES, n_obs)
    }

    /// Asymptotic normal confidence interval for the `p`-th quantile
    pub fn confidence_interval(
        &self,
        p: f64,
        n_obs: usize,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let std_error = self.standard_error(p, n_obs)?;
        if !(std_error.is_finite() && std_error > 0.0) {
            return Err(Error::Computation(format!(
                "Standard error {std_error} is not a positive finite number"
            )));
        }

        let critical_value = normal::ppf(1.0 - level.tail_probability());

        let estimate = self.model().quantile_at_probability(p);
        let margin = critical_value * std_error;
        Ok(ConfidenceInterval::new(
            estimate - margin,
            estimate + margin,
            estimate,
            level.value(),
        ))
    }
}

impl OrderStatisticVariance<GAndK> {
    pub fn for_params(params: GkParams) -> Self {
        Self::new(GAndK::new(params))
    }
}

/// Asymptotic variance of the `p`-th sample quantile of `n_obs` g-and-k
/// observations, with the conventional `c`
pub fn variance(p: f64, a: f64, b: f64, g: f64, k: f64, n_obs: usize) -> Result<f64> {
    OrderStatisticVariance::for_params(GkParams::new(a, b, g, k)).variance(p, n_obs)
}

/// Asymptotic normal confidence interval for the `p`-th quantile of `n_obs`
/// observations from `params`
///
/// `level` must lie in `(0, 1)`.
pub fn quantile_confidence_interval(
    p: f64,
    params: &GkParams,
    n_obs: usize,
    level: f64,
) -> Result<ConfidenceInterval> {
    let level = ConfidenceLevel::try_from(level)?;
    OrderStatisticVariance::for_params(*params).confidence_interval(p, n_obs, level)
}
