//! Asymptotic order-statistic theory for the g-and-k distribution
//!
//! This crate turns the density from `gandk-quantile` into the quantities a
//! simulation-based inference pipeline needs when data are summarised by
//! octiles:
//!
//! - **Order-statistic variance**: `p(1-p) / (n·f(x_p)²)` and the joint
//!   covariance of several sample quantiles
//! - **Octile summaries**: empirical octiles of a sample
//! - **Octile likelihood**: Gaussian approximation of the sampling
//!   distribution of the octiles
//! - **Asymptotic intervals**: normal confidence intervals for quantiles
//!
//! # Example
//!
//! ```rust
//! use gandk_confidence::{OctileLikelihood, OrderStatisticVariance};
//! use gandk_core::GkParams;
//!
//! let params = GkParams::new(3.0, 1.0, 2.0, 0.5);
//! let v = OrderStatisticVariance::for_params(params);
//!
//! let var_median = v.variance(0.5, 100).unwrap();
//! assert!(var_median > 0.0);
//!
//! let lik = OctileLikelihood::new(100);
//! let observed = lik.mean(&params);
//! let log_lik = lik.log_density(&observed, &params).unwrap();
//! assert!(log_lik.is_finite());
//! ```

mod likelihood;
mod octiles;
mod types;
mod variance;

pub use likelihood::OctileLikelihood;
pub use octiles::{
    empirical_quantile, empirical_quantile_sorted, octiles, octiles_sorted, OCTILE_PROBABILITIES,
};
pub use types::{ConfidenceInterval, ConfidenceLevel};
pub use variance::{quantile_confidence_interval, variance, OrderStatisticVariance};
