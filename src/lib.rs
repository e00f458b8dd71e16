//! g-and-k distribution toolkit
//!
//! Facade over the workspace crates:
//!
//! - [`common`]: parameters, errors, normal helpers
//! - [`quantile`]: quantile function, bisection inversion, density
//! - [`confidence`]: order-statistic variance, octiles, octile likelihood
//!
//! # Example
//!
//! ```rust
//! use gandk_stats::prelude::*;
//!
//! let params = GkParams::new(3.0, 1.0, 2.0, 0.5);
//! let model = GAndK::new(params);
//!
//! let x = model.quantile(0.5);
//! let pdf = DensityEvaluator::new(model).density(x).unwrap();
//! let var = OrderStatisticVariance::for_params(params).variance(0.25, 200).unwrap();
//! assert!(pdf > 0.0 && var > 0.0);
//! ```

pub use gandk_confidence as confidence;
pub use gandk_core as common;
pub use gandk_quantile as quantile;

pub use gandk_confidence::{
    octiles, quantile_confidence_interval, ConfidenceInterval, ConfidenceLevel, OctileLikelihood,
    OrderStatisticVariance, OCTILE_PROBABILITIES,
};
pub use gandk_core::{Error, GkParams, QuantileFunction, Result, DEFAULT_C};
pub use gandk_quantile::{
    BisectionConfig, DensityEvaluator, GAndK, InverseSolver, OutputScale, SolverMode,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BisectionConfig, DensityEvaluator, Error, GAndK, GkParams, InverseSolver,
        OctileLikelihood, OrderStatisticVariance, QuantileFunction, Result, SolverMode,
    };
}
