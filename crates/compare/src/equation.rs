//! Registry of the equations `dy/dx = f(x, y)` that can be compared.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stepwise_core::{Model, Sample};

/// A registered right-hand side `f(x, y)`.
///
/// Equations are selected by a short selector (`"1"`, `"2"`, `"3"`) or by
/// name, see [`Equation::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Equation {
    /// `dy/dx = -2x`
    NegativeLinear,

    /// `dy/dx = sin(x)`
    Sine,

    /// `dy/dx = sin(x)·cos(x) - y`
    DampedProduct,
}

/// The selector did not match any registered equation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown equation selector {0:?}")]
pub struct UnknownEquation(pub String);

impl Equation {
    /// Every registered equation, in selector order.
    pub const ALL: [Self; 3] = [Self::NegativeLinear, Self::Sine, Self::DampedProduct];

    /// Looks up an equation by selector (`"1"`..`"3"`) or name.
    ///
    /// Surrounding whitespace is ignored and names are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEquation`] if nothing matches.
    pub fn resolve(selector: &str) -> Result<Self, UnknownEquation> {
        let key = selector.trim();
        Self::ALL
            .into_iter()
            .find(|eq| eq.selector() == key || eq.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownEquation(selector.to_owned()))
    }

    /// Returns the numeric selector used by input controls.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::NegativeLinear => "1",
            Self::Sine => "2",
            Self::DampedProduct => "3",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NegativeLinear => "negative-linear",
            Self::Sine => "sine",
            Self::DampedProduct => "damped-product",
        }
    }

    /// Returns the equation written out, e.g. `dy/dx = -2x`.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Self::NegativeLinear => "dy/dx = -2x",
            Self::Sine => "dy/dx = sin(x)",
            Self::DampedProduct => "dy/dx = sin(x)cos(x) - y",
        }
    }

    /// Evaluates `f(x, y)`.
    #[must_use]
    pub fn slope(self, x: f64, y: f64) -> f64 {
        match self {
            Self::NegativeLinear => -2.0 * x,
            Self::Sine => x.sin(),
            Self::DampedProduct => x.sin() * x.cos() - y,
        }
    }

    /// Returns the solution through `(x0, y0)` in closed form, if one is known.
    #[must_use]
    pub fn exact(self, x0: f64, y0: f64) -> Option<ClosedForm> {
        let constant = match self {
            Self::NegativeLinear => y0 + x0 * x0,
            Self::Sine => y0 + x0.cos(),
            Self::DampedProduct => (y0 - damped_particular(x0)) * x0.exp(),
        };
        Some(ClosedForm {
            equation: self,
            constant,
        })
    }
}

/// Particular solution of `y' + y = sin(x)cos(x) = sin(2x)/2`.
fn damped_particular(x: f64) -> f64 {
    let two_x = 2.0 * x;
    two_x.sin() / 10.0 - two_x.cos() / 5.0
}

/// A closed-form solution of an [`Equation`] fixed by its initial condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedForm {
    equation: Equation,
    constant: f64,
}

impl ClosedForm {
    /// Returns `y(x)`.
    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        let c = self.constant;
        match self.equation {
            Equation::NegativeLinear => c - x * x,
            Equation::Sine => c - x.cos(),
            Equation::DampedProduct => damped_particular(x) + c * (-x).exp(),
        }
    }
}

impl Model for Equation {
    type Input = Sample;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Sample) -> Result<f64, Infallible> {
        Ok(self.slope(input.x, input.y))
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "equation {} ({})", self.selector(), self.formula())
    }
}

impl FromStr for Equation {
    type Err = UnknownEquation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl TryFrom<String> for Equation {
    type Error = UnknownEquation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::resolve(&value)
    }
}

impl From<Equation> for String {
    fn from(equation: Equation) -> Self {
        equation.selector().to_owned()
    }
}
