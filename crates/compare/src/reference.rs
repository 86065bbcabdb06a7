//! Sources for the reference trajectory an approximation is measured against.

use serde::{Deserialize, Serialize};

use stepwise_core::{Sample, Trajectory};
use stepwise_solvers::fixed_step::{self, RungeKutta4, StepGrid};

use crate::{equation::Equation, error::Error};

/// How the reference ("true") trajectory is produced.
///
/// Either source yields one sample per grid point, so the reference is always
/// index-aligned with an approximation computed on the same grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    /// Integrate with the classic fourth-order Runge-Kutta method.
    #[default]
    #[serde(rename = "rk4")]
    RungeKutta4,

    /// Evaluate the equation's closed-form solution at each grid point.
    #[serde(rename = "exact")]
    ClosedForm,
}

impl Reference {
    /// Produces the reference trajectory through `(grid.start(), y0)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoClosedForm`] if a closed form is requested for an
    /// equation without one, or [`Error::Solver`] if integration fails.
    pub fn trajectory(
        self,
        equation: Equation,
        y0: f64,
        grid: &StepGrid,
    ) -> Result<Trajectory, Error> {
        match self {
            Self::RungeKutta4 => Ok(fixed_step::integrate(&equation, &RungeKutta4, y0, grid)?),
            Self::ClosedForm => {
                let exact = equation
                    .exact(grid.start(), y0)
                    .ok_or(Error::NoClosedForm(equation))?;

                let mut trajectory = Trajectory::with_capacity(grid.len());
                trajectory.push(Sample::new(grid.start(), y0));
                for n in 1..grid.len() {
                    let x = grid.x_at(n);
                    trajectory.push(Sample::new(x, exact.value(x)));
                }
                Ok(trajectory)
            }
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RungeKutta4 => "RK4",
            Self::ClosedForm => "closed form",
        }
    }
}
