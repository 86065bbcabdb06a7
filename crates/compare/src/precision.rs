//! Pass/fail classification of a run against a precision tolerance.

use serde::Serialize;

use crate::{analysis::RankedErrors, config::ConfigError};

/// Tolerance used when a run does not specify one.
pub const DEFAULT_PRECISION: f64 = 0.01;

/// A finite, positive bound on the acceptable error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Precision`] if `value` is not finite and positive.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Precision(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

/// Outcome of comparing the maximum error with a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    /// Largest error over the whole trajectory.
    pub max_error: f64,

    /// The tolerance the run was checked against.
    pub tolerance: Tolerance,

    /// True if `max_error <= tolerance`.
    pub passed: bool,
}

/// Checks every error point against `tolerance`.
#[must_use]
pub fn evaluate(errors: &RankedErrors, tolerance: Tolerance) -> Verdict {
    let max_error = errors.max_error();
    Verdict {
        max_error,
        tolerance,
        passed: max_error <= tolerance.value(),
    }
}
