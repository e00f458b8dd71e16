//! Core traits for quantile-defined distributions

use crate::math::distributions::normal;
use crate::Result;

/// A distribution defined through a quantile transform of a standard normal
///
/// Implementors map a standard-normal coordinate `z` to the value
/// `x = Q(z)`. The transform must be strictly increasing on the region where
/// the caller intends to invert it.
pub trait QuantileFunction: Send + Sync {
    /// Evaluate `Q(z)`
    fn quantile(&self, z: f64) -> f64;

    /// Evaluate `dQ/dz` at `z`
    fn derivative(&self, z: f64) -> f64;

    /// Evaluate the quantile at cumulative probability `p`
    ///
    /// # Arguments
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_at_probability(&self, p: f64) -> f64 {
        self.quantile(normal::ppf(p))
    }

    /// Evaluate `Q` over several standard-normal coordinates
    fn quantiles(&self, zs: &[f64]) -> Vec<f64> {
        zs.iter().map(|&z| self.quantile(z)).collect()
    }

    /// Check that the transform is monotone and therefore invertible
    ///
    /// Strict solvers call this before inverting. The default accepts
    /// everything.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<Q: QuantileFunction + ?Sized> QuantileFunction for &Q {
    fn quantile(&self, z: f64) -> f64 {
        (**self).quantile(z)
    }

    fn derivative(&self, z: f64) -> f64 {
        (**self).derivative(z)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}
