//! Gaussian likelihood of observed octiles
//!
//! Treats the vector of sample octiles as multivariate normal with mean
//! `Q(Φ⁻¹(p_i))` and the asymptotic order-statistic covariance. This is the
//! partial-posterior likelihood an exact gradient-based sampler targets when
//! only the octile summaries of a dataset are retained.

use gandk_core::{Error, GkParams, QuantileFunction, Result};
use gandk_quantile::{GAndK, InverseSolver};
use nalgebra::DVector;
use std::f64::consts::PI;
use tracing::{debug, instrument};

use crate::octiles::OCTILE_PROBABILITIES;
use crate::variance::OrderStatisticVariance;

/// Log-likelihood of summary quantiles under the large-sample normal
/// approximation
#[derive(Debug, Clone)]
pub struct OctileLikelihood {
    probabilities: Vec<f64>,
    n_obs: usize,
    solver: InverseSolver,
}

impl OctileLikelihood {
    /// Likelihood of the seven octiles of a sample of size `n_obs`
    pub fn new(n_obs: usize) -> Self {
        Self::with_probabilities(OCTILE_PROBABILITIES.to_vec(), n_obs)
    }

    /// Likelihood of the sample quantiles at arbitrary probabilities
    pub fn with_probabilities(probabilities: Vec<f64>, n_obs: usize) -> Self {
        Self {
            probabilities,
            n_obs,
            solver: InverseSolver::default(),
        }
    }

    pub fn with_solver(mut self, solver: InverseSolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Population quantiles at the configured probabilities
    pub fn mean(&self, params: &GkParams) -> Vec<f64> {
        let model = GAndK::new(*params);
        self.probabilities
            .iter()
            .map(|&p| model.quantile_at_probability(p))
            .collect()
    }

    /// Log-density of `observed` summary quantiles at `params`
    #[instrument(level = "trace", skip(self, observed))]
    pub fn log_density(&self, observed: &[f64], params: &GkParams) -> Result<f64> {
        let m = self.probabilities.len();
        if observed.len() != m {
            return Err(Error::InvalidParameter(format!(
                "Expected {m} summary quantiles, got {}",
                observed.len()
            )));
        }

        let model = GAndK::new(*params);
        let cov = OrderStatisticVariance::with_solver(model, self.solver)
            .covariance(&self.probabilities, self.n_obs)?;
        let chol = cov.cholesky().ok_or_else(|| {
            debug!(%params, "octile covariance not positive definite");
            Error::Computation("Octile covariance is not positive definite".to_string())
        })?;

        let mean = self.mean(params);
        let diff = DVector::from_iterator(m, observed.iter().zip(&mean).map(|(o, mu)| o - mu));
        let quad = diff.dot(&chol.solve(&diff));
        let log_det = 2.0 * chol.l().diagonal().iter().map(|d| d.ln()).sum::<f64>();

        Ok(-0.5 * (quad + log_det + m as f64 * (2.0 * PI).ln()))
    }
}
