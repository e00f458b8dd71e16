//! Mathematical utilities shared across the g-and-k crates
//!
//! Standard-normal functions used to map between probabilities and the
//! z-scale the quantile function is written in.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use statrs::function::erf::{erf, erfc_inv};
        use std::f64::consts::{PI, SQRT_2};

        /// ln(sqrt(2π))
        const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

        /// Probability density of the standard normal
        #[inline]
        pub fn pdf(x: f64) -> f64 {
            (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
        }

        /// Log density of the standard normal
        #[inline]
        pub fn ln_pdf(x: f64) -> f64 {
            -0.5 * x * x - LN_SQRT_2PI
        }

        /// Cumulative distribution function of the standard normal
        pub fn cdf(x: f64) -> f64 {
            if x == f64::NEG_INFINITY {
                return 0.0;
            }
            if x == f64::INFINITY {
                return 1.0;
            }
            0.5 * (1.0 + erf(x / SQRT_2))
        }

        /// Inverse CDF (percent point function) of the standard normal
        ///
        /// Returns `±∞` at the boundaries and NaN outside `[0, 1]`.
        pub fn ppf(p: f64) -> f64 {
            if p.is_nan() || !(0.0..=1.0).contains(&p) {
                return f64::NAN;
            }
            if p == 0.0 {
                return f64::NEG_INFINITY;
            }
            if p == 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

        /// Alias for ppf that matches common naming
        #[inline]
        pub fn quantile(p: f64) -> f64 {
            ppf(p)
        }

    }
}
