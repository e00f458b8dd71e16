//! g-and-k quantile function, inversion and density
//!
//! The g-and-k distribution has no closed-form density; it is defined by its
//! quantile function `Q(z)` applied to a standard-normal `z`. This crate
//! provides:
//!
//! - **[`GAndK`]**: the forward quantile function, its analytic derivative and
//!   a forward simulator
//! - **[`InverseSolver`]**: bounded bisection recovering `z` from an
//!   observation, in best-effort or strict mode
//! - **[`DensityEvaluator`]**: `f(x) = φ(z) / Q'(z)` and the exact
//!   log-likelihood of a sample
//!
//! # Example
//!
//! ```rust
//! use gandk_core::{GkParams, QuantileFunction};
//! use gandk_quantile::{DensityEvaluator, GAndK, InverseSolver};
//!
//! let model = GAndK::new(GkParams::new(3.0, 1.0, 2.0, 0.5));
//! assert_eq!(model.quantile(0.0), 3.0);
//!
//! let x = model.quantile(1.0);
//! let z = InverseSolver::default().invert(&model, x).unwrap();
//! assert!((z - 1.0).abs() < 1e-4);
//!
//! let pdf = DensityEvaluator::new(model).density(x).unwrap();
//! assert!(pdf > 0.0);
//! ```

pub mod density;
pub mod model;
pub mod solver;

pub use density::{density, DensityEvaluator};
pub use model::{derivative, quantile, GAndK};
pub use solver::{
    invert, BisectionConfig, BisectionState, InverseSolver, Inversion, OutputScale, SolverMode,
    DEFAULT_BRACKET, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

// Re-export from gandk-core
pub use gandk_core::{Error, GkParams, QuantileFunction, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BisectionConfig, DensityEvaluator, Error, GAndK, GkParams, InverseSolver,
        QuantileFunction, Result, SolverMode,
    };
}
