use enclose_core::Interval;
use num_traits::FromPrimitive;
use thiserror::Error;

use super::Error;

/// Configuration for the interval Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_width: f64,
    alpha: f64,
    max_iters: usize,
}

/// Errors that can occur when validating an interval Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_width must be finite and positive")]
    MaxWidth,

    #[error("alpha must lie strictly between 0 and 1")]
    Alpha,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-10, 0.75, 1_000_000).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// - `max_width`: a candidate narrower than this is accepted as a root
    ///   enclosure.
    /// - `alpha`: a Newton step must shrink a candidate below
    ///   `alpha * width` or the candidate is bisected instead.
    /// - `max_iters`: the number of candidates processed before giving up.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_width` is not finite and positive, or if
    /// `alpha` is not in the open interval `(0, 1)`.
    pub fn new(max_width: f64, alpha: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !max_width.is_finite() || max_width <= 0.0 {
            return Err(ConfigError::MaxWidth);
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::Alpha);
        }

        Ok(Self {
            max_width,
            alpha,
            max_iters,
        })
    }

    /// Returns the absolute width below which a candidate is accepted.
    #[must_use]
    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Returns the minimum shrink fraction required of a Newton step.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the maximum number of processed candidates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Config tolerances converted into the interval's scalar type.
#[derive(Debug, Clone, Copy)]
pub struct Tolerances<I: Interval> {
    max_width: I::Scalar,
    alpha: I::Scalar,
}

impl<I: Interval> Tolerances<I> {
    /// Converts the config tolerances into `I::Scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableTolerance`] if a tolerance has no
    /// representation in the scalar type.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            max_width: to_scalar(config.max_width)?,
            alpha: to_scalar(config.alpha)?,
        })
    }

    /// Returns the acceptance width in the interval's scalar type.
    ///
    /// Custom [`Variant`](super::Variant)s compare against this directly.
    #[must_use]
    pub fn max_width(&self) -> I::Scalar {
        self.max_width
    }

    /// Returns the minimum shrink fraction in the interval's scalar type.
    #[must_use]
    pub fn alpha(&self) -> I::Scalar {
        self.alpha
    }

    /// Returns true if `candidate` is narrow enough to be accepted.
    pub fn is_converged(&self, candidate: &I) -> bool {
        candidate.width() < self.max_width
    }

    /// Returns true if `narrowed` failed to shrink below `alpha` times the
    /// width of `original`.
    pub fn is_stalled(&self, narrowed: &I, original: &I) -> bool {
        narrowed.width() > self.alpha * original.width()
    }
}

fn to_scalar<S: FromPrimitive>(value: f64) -> Result<S, Error> {
    S::from_f64(value).ok_or(Error::UnrepresentableTolerance { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    use enclose_interval::F64Interval;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_width(), 1e-10);
        assert_eq!(config.alpha(), 0.75);
        assert_eq!(config.max_iters(), 1_000_000);
    }

    #[test]
    fn rejects_non_positive_max_width() {
        assert_eq!(Config::new(0.0, 0.75, 10), Err(ConfigError::MaxWidth));
        assert_eq!(Config::new(-1e-3, 0.75, 10), Err(ConfigError::MaxWidth));
        assert_eq!(Config::new(f64::NAN, 0.75, 10), Err(ConfigError::MaxWidth));
        assert_eq!(Config::new(f64::INFINITY, 0.75, 10), Err(ConfigError::MaxWidth));
    }

    #[test]
    fn rejects_alpha_outside_unit_interval() {
        assert_eq!(Config::new(1e-6, 0.0, 10), Err(ConfigError::Alpha));
        assert_eq!(Config::new(1e-6, 1.0, 10), Err(ConfigError::Alpha));
        assert_eq!(Config::new(1e-6, f64::NAN, 10), Err(ConfigError::Alpha));
        assert!(Config::new(1e-6, 0.5, 10).is_ok());
    }

    #[test]
    fn tolerances_drive_acceptance_and_stall_checks() {
        let config = Config::new(0.1, 0.5, 10).expect("valid config");
        let tol = Tolerances::<F64Interval>::from_config(&config).expect("f64 tolerances");
        let x = F64Interval::new(0.0, 1.0).expect("valid interval");

        assert_eq!(tol.max_width(), 0.1);
        assert_eq!(tol.alpha(), 0.5);

        assert!(tol.is_converged(&F64Interval::new(0.0, 0.05).expect("valid interval")));
        assert!(!tol.is_converged(&F64Interval::new(0.0, 0.2).expect("valid interval")));
        assert!(tol.is_stalled(&F64Interval::new(0.0, 0.6).expect("valid interval"), &x));
        assert!(!tol.is_stalled(&F64Interval::new(0.0, 0.4).expect("valid interval"), &x));
    }

    #[test]
    fn unrepresentable_tolerance_is_reported() {
        let err = to_scalar::<u8>(1000.0).expect_err("u8 cannot hold 1000");
        assert!(matches!(err, Error::UnrepresentableTolerance { value } if value == 1000.0));
        assert_eq!(to_scalar::<f32>(0.75).expect("f32 holds 0.75"), 0.75_f32);
    }
}
