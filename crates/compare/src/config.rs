//! Run configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stepwise_solvers::fixed_step::{GridError, MAX_STEPS, StepGrid};

use crate::{
    equation::Equation,
    precision::{DEFAULT_PRECISION, Tolerance},
    reference::Reference,
};

/// Step size callers substitute when the requested one is unusable.
pub const DEFAULT_STEP_SIZE: f64 = 0.001;

/// Parameters of one comparison run.
///
/// A config is plain data. [`validate`](Self::validate) checks it without
/// changing anything; callers that want the documented fallbacks for a bad
/// step size or precision apply [`with_defaults`](Self::with_defaults) first.
///
/// # TOML
///
/// ```toml
/// y0 = 1.0
/// x0 = 0.0
/// dx = 0.001
/// horizon = 10.0
/// equation = "1"
/// precision = 0.01    # optional
/// reference = "rk4"   # optional, "rk4" or "exact"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Initial value `y(x0)`.
    pub y0: f64,

    /// Start of the domain.
    pub x0: f64,

    /// Step size.
    pub dx: f64,

    /// End of the domain, `X`.
    pub horizon: f64,

    pub equation: Equation,

    /// Tolerance for the precision verdict, [`DEFAULT_PRECISION`] if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,

    /// How the reference trajectory is produced.
    #[serde(default)]
    pub reference: Reference,
}

/// Errors that can occur when validating a [`SimulationConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step size must be finite and positive, got {0}")]
    Step(f64),

    #[error("precision must be finite and positive, got {0}")]
    Precision(f64),

    #[error("initial value must be finite, got {0}")]
    InitialValue(f64),

    #[error("domain bounds must be finite")]
    Bounds,

    #[error("horizon {horizon} must be greater than x0 {x0}")]
    EmptyDomain { x0: f64, horizon: f64 },

    #[error("domain needs more than {max} steps at this step size", max = MAX_STEPS)]
    TooManySteps,
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::Step(dx) => Self::Step(dx),
            GridError::Bounds => Self::Bounds,
            GridError::TooManySteps => Self::TooManySteps,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            y0: 1.0,
            x0: 0.0,
            dx: DEFAULT_STEP_SIZE,
            horizon: 10.0,
            equation: Equation::NegativeLinear,
            precision: None,
            reference: Reference::default(),
        }
    }
}

impl SimulationConfig {
    /// Creates a config with the default precision and reference.
    #[must_use]
    pub fn new(equation: Equation, y0: f64, x0: f64, dx: f64, horizon: f64) -> Self {
        Self {
            y0,
            x0,
            dx,
            horizon,
            equation,
            precision: None,
            reference: Reference::default(),
        }
    }

    /// Sets the precision tolerance.
    #[must_use]
    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the reference source.
    #[must_use]
    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = reference;
        self
    }

    /// Replaces an unusable step size or precision with its documented default.
    ///
    /// A step size or precision that is not finite and positive becomes
    /// [`DEFAULT_STEP_SIZE`] or [`DEFAULT_PRECISION`]. Other fields are left
    /// alone, so the result may still fail [`validate`](Self::validate).
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if !is_positive(self.dx) {
            log::debug!("substituting default step size for {}", self.dx);
            self.dx = DEFAULT_STEP_SIZE;
        }
        if let Some(precision) = self.precision
            && !is_positive(precision)
        {
            log::debug!("substituting default precision for {precision}");
            self.precision = Some(DEFAULT_PRECISION);
        }
        self
    }

    /// Checks the config without modifying it.
    ///
    /// # Errors
    ///
    /// Returns the first problem found; see [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        self.tolerance()?;
        Ok(())
    }

    /// Builds the step grid for this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size, bounds, or initial value are invalid,
    /// or if the domain is empty or too large for the step size.
    pub fn grid(&self) -> Result<StepGrid, ConfigError> {
        if !is_positive(self.dx) {
            return Err(ConfigError::Step(self.dx));
        }
        if !self.x0.is_finite() || !self.horizon.is_finite() {
            return Err(ConfigError::Bounds);
        }
        if !self.y0.is_finite() {
            return Err(ConfigError::InitialValue(self.y0));
        }
        if self.horizon <= self.x0 {
            return Err(ConfigError::EmptyDomain {
                x0: self.x0,
                horizon: self.horizon,
            });
        }
        Ok(StepGrid::new(self.x0, self.dx, self.horizon)?)
    }

    /// Returns the precision tolerance, or the default if none is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Precision`] if the precision is not finite and positive.
    pub fn tolerance(&self) -> Result<Tolerance, ConfigError> {
        self.precision.map_or(Ok(Tolerance::default()), Tolerance::new)
    }

    /// Parses a config from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, a field is missing or
    /// unknown, or the equation selector is not registered.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
