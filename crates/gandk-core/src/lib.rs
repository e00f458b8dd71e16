//! Core traits and types for the g-and-k toolkit
//!
//! This crate holds what every other crate in the workspace shares:
//!
//! - [`GkParams`]: the `(A, B, g, k, c)` parameter set and its validity checks
//! - [`Error`] / [`Result`]: the unified error type
//! - [`QuantileFunction`]: the seam between a forward model and the solvers
//!   that invert it
//! - [`math`]: standard-normal helpers
//!
//! # Example
//!
//! ```rust
//! use gandk_core::{math::distributions::normal, GkParams};
//!
//! let params = GkParams::try_new(3.0, 1.0, 2.0, 0.5).unwrap();
//! assert_eq!(params.c, 0.8);
//! assert!((normal::cdf(0.0) - 0.5).abs() < 1e-15);
//! ```

pub mod error;
pub mod math;
pub mod params;
pub mod traits;

pub use error::{check_open_probability, Error, Result};
pub use params::{GkParams, DEFAULT_C};
pub use traits::QuantileFunction;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{GkParams, QuantileFunction, Result};
}
