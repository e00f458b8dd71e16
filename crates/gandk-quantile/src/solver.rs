//! Bisection inversion of a quantile function
//!
//! Given an observation `x`, recovers the standard-normal coordinate `z`
//! with `Q(z) = x` by bounded bisection on `f(z) = Q(z) - x`.

use gandk_core::math::distributions::normal;
use gandk_core::{Error, GkParams, QuantileFunction, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::model::GAndK;

/// Default search interval on the z-scale
pub const DEFAULT_BRACKET: (f64, f64) = (-5.0, 5.0);
/// Default tolerance on both `|f(mid)|` and the bracket half-width
pub const DEFAULT_TOLERANCE: f64 = 1e-5;
/// Default iteration budget
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// How the solver reports trouble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverMode {
    /// Always return the midpoint of the final bracket
    #[default]
    BestEffort,
    /// Report domain, bracketing and convergence failures as errors
    Strict,
}

/// Scale of the value returned by an inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputScale {
    /// Standard-normal coordinate `z`
    #[default]
    ZScore,
    /// Cumulative probability `Φ(z)`
    Probability,
}

/// Bisection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BisectionConfig {
    /// Initial `(low, high)` interval on the z-scale
    pub bracket: (f64, f64),
    /// Tolerance on `|f(mid)|` and on the bracket half-width
    pub tolerance: f64,
    /// Maximum number of bisection steps
    pub max_iterations: usize,
    /// Error reporting policy
    pub mode: SolverMode,
    /// Scale of the returned value
    pub scale: OutputScale,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            bracket: DEFAULT_BRACKET,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            mode: SolverMode::BestEffort,
            scale: OutputScale::ZScore,
        }
    }
}

impl BisectionConfig {
    /// Default settings in strict mode
    pub fn strict() -> Self {
        Self::default().with_mode(SolverMode::Strict)
    }

    pub fn with_bracket(mut self, low: f64, high: f64) -> Self {
        self.bracket = (low, high);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_mode(mut self, mode: SolverMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_scale(mut self, scale: OutputScale) -> Self {
        self.scale = scale;
        self
    }

    /// Check that the bracket is a finite, non-empty interval and the
    /// tolerance is positive
    pub fn validate(&self) -> Result<()> {
        let (low, high) = self.bracket;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(Error::InvalidParameter(format!(
                "Bracket [{low}, {high}] must be a finite interval with low < high"
            )));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Tolerance {} must be positive",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Working state of a single bisection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionState {
    pub low: f64,
    pub high: f64,
    /// Sign of `f(low)`
    pub sign_at_low: f64,
    pub done: bool,
    pub iterations: usize,
}

impl BisectionState {
    fn new(low: f64, high: f64, f_low: f64) -> Self {
        Self {
            low,
            high,
            sign_at_low: f_low.signum(),
            done: false,
            iterations: 0,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.high - self.low)
    }

    /// Keep the half whose sign matches the retained low endpoint
    fn narrow(&mut self, mid: f64, f_mid: f64) {
        if f_mid.signum() * self.sign_at_low > 0.0 {
            self.low = mid;
            self.sign_at_low = f_mid.signum();
        } else {
            self.high = mid;
        }
    }
}

/// Outcome of an inversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion {
    /// Recovered value on the configured output scale
    pub value: f64,
    /// Recovered standard-normal coordinate
    pub z: f64,
    /// Bisection steps taken
    pub iterations: usize,
    /// Whether a tolerance criterion was met
    pub converged: bool,
    /// `Q(z) - x` at the returned coordinate
    pub residual: f64,
}

/// Numerical inverse of a quantile function by bounded bisection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InverseSolver {
    config: BisectionConfig,
}

impl InverseSolver {
    /// Create a solver without checking the configuration
    pub fn new(config: BisectionConfig) -> Self {
        Self { config }
    }

    /// Create a solver after validating the configuration
    pub fn try_new(config: BisectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Default settings in strict mode
    pub fn strict() -> Self {
        Self::new(BisectionConfig::strict())
    }

    pub fn config(&self) -> &BisectionConfig {
        &self.config
    }

    pub fn is_strict(&self) -> bool {
        self.config.mode == SolverMode::Strict
    }

    /// Solver identical to this one but returning z-scores
    pub fn z_scale(&self) -> Self {
        Self::new(self.config.with_scale(OutputScale::ZScore))
    }

    /// Invert `model` at `x`, returning the value on the configured scale
    pub fn invert<Q: QuantileFunction + ?Sized>(&self, model: &Q, x: f64) -> Result<f64> {
        self.invert_detailed(model, x).map(|inv| inv.value)
    }

    /// Invert `model` at `x` and report how the search ended
    #[instrument(level = "trace", skip(self, model))]
    pub fn invert_detailed<Q: QuantileFunction + ?Sized>(
        &self,
        model: &Q,
        x: f64,
    ) -> Result<Inversion> {
        let strict = self.is_strict();
        let tol = self.config.tolerance;
        if strict {
            self.config.validate()?;
            model.validate()?;
            if !x.is_finite() {
                return Err(Error::non_finite("observation"));
            }
        }

        let f = |z: f64| model.quantile(z) - x;
        let (low, high) = self.config.bracket;
        let f_low = f(low);
        if f_low.abs() <= tol {
            return Ok(self.finish(low, 0, true, f_low));
        }
        let f_high = f(high);
        if f_high.abs() <= tol {
            return Ok(self.finish(high, 0, true, f_high));
        }

        // False for NaN endpoint values as well as same-sign pairs
        let straddles = f_low.signum() * f_high.signum() <= 0.0;
        if f_low.signum() * f_high.signum() > 0.0 {
            if strict {
                return Err(Error::Bracketing {
                    low,
                    high,
                    f_low,
                    f_high,
                });
            }
            debug!(x, low, high, f_low, f_high, "bracket does not straddle a root");
        }

        let mut state = BisectionState::new(low, high, f_low);
        while !state.done && state.iterations < self.config.max_iterations {
            let mid = state.midpoint();
            let f_mid = f(mid);
            state.iterations += 1;
            if f_mid.abs() <= tol {
                state.done = true;
                break;
            }
            state.narrow(mid, f_mid);
            if state.half_width() < tol {
                state.done = true;
            }
        }

        let z = state.midpoint();
        let residual = f(z);
        trace!(z, residual, iterations = state.iterations, "bisection finished");

        if !state.done {
            if strict {
                return Err(Error::Convergence {
                    iterations: state.iterations,
                    residual,
                });
            }
            debug!(
                x,
                z,
                residual,
                iterations = state.iterations,
                "iteration budget exhausted, returning best estimate"
            );
        }

        // A collapsed bracket only locates a root if one was enclosed
        let converged = state.done && (straddles || residual.abs() <= tol);
        if state.done && !converged {
            debug!(x, z, residual, "bracket collapsed without enclosing a root");
        }

        Ok(self.finish(z, state.iterations, converged, residual))
    }

    /// Invert a batch of observations
    pub fn invert_all<Q: QuantileFunction + ?Sized>(
        &self,
        model: &Q,
        xs: &[f64],
    ) -> Result<Vec<f64>> {
        xs.iter().map(|&x| self.invert(model, x)).collect()
    }

    fn finish(&self, z: f64, iterations: usize, converged: bool, residual: f64) -> Inversion {
        let value = match self.config.scale {
            OutputScale::ZScore => z,
            OutputScale::Probability => normal::cdf(z),
        };
        Inversion {
            value,
            z,
            iterations,
            converged,
            residual,
        }
    }
}

/// Invert the g-and-k quantile function at `x`
pub fn invert(x: f64, params: &GkParams, config: &BisectionConfig) -> Result<f64> {
    InverseSolver::new(*config).invert(&GAndK::new(*params), x)
}
