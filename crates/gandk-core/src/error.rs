//! Error types for g-and-k computations
//!
//! Provides a unified error type for all gandk-stats crates.

use thiserror::Error;

/// Core error type for g-and-k operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input outside the region where the model is well defined
    #[error("Domain error: {0}")]
    Domain(String),

    /// Bisection endpoints do not straddle a root
    #[error(
        "Bracketing error: f({low}) = {f_low} and f({high}) = {f_high} have the same sign"
    )]
    Bracketing {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },

    /// Iteration budget exhausted before reaching tolerance
    #[error("Convergence error: no root within tolerance after {iterations} iterations (residual {residual})")]
    Convergence { iterations: usize, residual: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a probability outside the open unit interval
    pub fn invalid_probability(p: f64) -> Self {
        Self::Domain(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Domain(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error came from the root finder
    pub fn is_solver_failure(&self) -> bool {
        matches!(self, Self::Bracketing { .. } | Self::Convergence { .. })
    }
}

/// Check that `p` lies strictly inside (0, 1)
pub fn check_open_probability(p: f64) -> Result<()> {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return Err(Error::invalid_probability(p));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Domain("b must be positive".to_string());
        assert_eq!(err.to_string(), "Domain error: b must be positive");

        let err = Error::Convergence {
            iterations: 100,
            residual: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "Convergence error: no root within tolerance after 100 iterations (residual 0.5)"
        );

        let err = Error::Bracketing {
            low: -5.0,
            high: 5.0,
            f_low: -1.0,
            f_high: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "Bracketing error: f(-5) = -1 and f(5) = -2 have the same sign"
        );

        let err = Error::InsufficientData {
            expected: 7,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 7 samples, got 0"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::invalid_probability(1.5);
        assert_eq!(err.to_string(), "Domain error: Probability 1.5 must be in (0, 1)");

        let err = Error::non_finite("sample");
        assert_eq!(
            err.to_string(),
            "Domain error: sample contains NaN or infinite values"
        );
    }

    #[test]
    fn test_solver_failure_classification() {
        assert!(Error::Convergence {
            iterations: 3,
            residual: 1.0
        }
        .is_solver_failure());
        assert!(Error::Bracketing {
            low: 0.0,
            high: 1.0,
            f_low: 1.0,
            f_high: 1.0
        }
        .is_solver_failure());
        assert!(!Error::invalid_probability(0.0).is_solver_failure());
    }

    #[test]
    fn test_open_probability() {
        assert!(check_open_probability(0.5).is_ok());
        assert!(check_open_probability(0.0).is_err());
        assert!(check_open_probability(1.0).is_err());
        assert!(check_open_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
