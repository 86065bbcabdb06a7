//! Fixed-step solvers for scalar ODEs `dy/dx = f(x, y)`.
//!
//! # Algorithm
//!
//! Starting from `(x0, y0)`, the solver applies a [`Stepper`] once per grid
//! interval:
//!
//! ```text
//! x_n     = x0 + n·dx
//! y_{n+1} = step(f, (x_n, y_n), dx)
//! ```
//!
//! Two steppers are provided: [`ForwardEuler`] (first order) and
//! [`RungeKutta4`] (fourth order). Runtime selection between them goes through
//! [`Method`].
//!
//! Integration continues until the first grid point with `x >= horizon`, so the
//! last sample may overshoot the horizon by less than one step. Because every
//! solver shares the same [`StepGrid`], trajectories produced on one grid are
//! index-aligned regardless of the stepper.
//!
//! # Observer Events
//!
//! The solver emits an [`Event`] for the initial sample (step 0) and after each
//! step. Observers can return [`Action::StopEarly`] to halt and keep the
//! trajectory computed so far.
//!
//! # Example
//!
//! ```
//! use stepwise_core::Slope;
//! use stepwise_solvers::fixed_step::{self, RungeKutta4, StepGrid};
//!
//! let model = Slope(|x: f64, _y: f64| -2.0 * x);
//! let grid = StepGrid::new(0.0, 0.01, 1.0)?;
//!
//! let trajectory = fixed_step::integrate(&model, &RungeKutta4, 1.0, &grid)?;
//!
//! assert_eq!(trajectory.len(), 101);
//! assert!(trajectory.last().unwrap().y.abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod grid;
mod solution;
mod stepper;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use grid::{GridError, MAX_STEPS, StepGrid};
pub use solution::{Solution, Status};
pub use stepper::{ForwardEuler, Method, RungeKutta4, Stepper};

use stepwise_core::{Model, Observer, Sample, Trajectory};

/// Integrates `dy/dx = f(x, y)` over a grid.
///
/// # Algorithm
///
/// 1. Record the initial sample `(x0, y0)` and emit step 0.
/// 2. For each step `n` in `1..=grid.steps()`:
///    - Advance `y` with the stepper from the previous sample.
///    - Place the new sample at `x0 + n·dx`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// # Errors
///
/// Returns an error if the model fails at any point.
pub fn solve<M, S, Obs>(
    model: &M,
    stepper: &S,
    y0: f64,
    grid: &StepGrid,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = Sample, Output = f64>,
    S: Stepper,
    Obs: Observer<Event, Action>,
{
    let mut current = Sample::new(grid.start(), y0);

    let mut trajectory = Trajectory::with_capacity(grid.len());
    trajectory.push(current);

    let event = Event {
        step: 0,
        sample: current,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        });
    }

    let dx = grid.step_size();

    for step in 1..=grid.steps() {
        let y = stepper
            .step(model, current, dx)
            .map_err(|err| Error::model(step, err))?;

        let next = Sample::new(grid.x_at(step), y);
        trajectory.push(next);

        let event = Event { step, sample: next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            });
        }

        current = next;
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps: grid.steps(),
    })
}

/// Integrates over a grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model fails at any point.
pub fn solve_unobserved<M, S>(
    model: &M,
    stepper: &S,
    y0: f64,
    grid: &StepGrid,
) -> Result<Solution, Error>
where
    M: Model<Input = Sample, Output = f64>,
    S: Stepper,
{
    solve(model, stepper, y0, grid, ())
}

/// Integrates over a grid and returns only the trajectory.
///
/// # Errors
///
/// Returns an error if the model fails at any point.
pub fn integrate<M, S>(
    model: &M,
    stepper: &S,
    y0: f64,
    grid: &StepGrid,
) -> Result<Trajectory, Error>
where
    M: Model<Input = Sample, Output = f64>,
    S: Stepper,
{
    solve_unobserved(model, stepper, y0, grid).map(|solution| solution.trajectory)
}
