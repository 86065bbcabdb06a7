use std::cell::Cell;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use thiserror::Error;

use stepwise_core::{Model, Sample, Slope};

use super::{
    Action, Error, Event, ForwardEuler, Method, RungeKutta4, Status, StepGrid, integrate, solve,
    solve_unobserved,
};

fn neg_two_x() -> Slope<impl Fn(f64, f64) -> f64> {
    Slope(|x: f64, _y: f64| -2.0 * x)
}

#[test]
fn euler_steps_by_slope_times_dx() {
    let grid = StepGrid::new(0.0, 0.5, 1.0).unwrap();

    let trajectory = integrate(&neg_two_x(), &ForwardEuler, 1.0, &grid).expect("should solve");

    assert_eq!(trajectory.xs(), vec![0.0, 0.5, 1.0]);
    assert_eq!(trajectory.ys(), vec![1.0, 1.0, 0.5]);
}

#[test]
fn rk4_reaches_analytic_value() {
    // y = 1 - x², so y(1) = 0.
    let grid = StepGrid::new(0.0, 0.01, 1.0).unwrap();

    let trajectory = integrate(&neg_two_x(), &RungeKutta4, 1.0, &grid).expect("should solve");

    let last = trajectory.last().unwrap();
    assert_relative_eq!(last.x, 1.0);
    assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-6);
}

#[test]
fn rk4_error_shrinks_with_step_size() {
    // y' = y - x², y(0) = 1 has solution y = x² + 2x + 2 - e^x.
    let model = Slope(|x: f64, y: f64| y - x * x);
    let exact = |x: f64| x * x + 2.0 * x + 2.0 - x.exp();

    let error_at_end = |dx: f64| {
        let grid = StepGrid::new(0.0, dx, 1.0).unwrap();
        let trajectory = integrate(&model, &RungeKutta4, 1.0, &grid).unwrap();
        let last = trajectory.last().copied().unwrap();
        (last.y - exact(last.x)).abs()
    };

    let coarse = error_at_end(0.1);
    let fine = error_at_end(0.05);

    assert!(fine <= coarse);
    // Fourth order: halving dx cuts the error by roughly 16.
    assert!(coarse / fine > 10.0);
}

#[test]
fn methods_produce_index_aligned_trajectories() {
    let model = Slope(|x: f64, y: f64| x.sin() * x.cos() - y);
    let grid = StepGrid::new(0.0, 0.001, 10.0).unwrap();

    let euler = integrate(&model, &Method::ForwardEuler, 1.0, &grid).unwrap();
    let rk4 = integrate(&model, &Method::RungeKutta4, 1.0, &grid).unwrap();

    assert_eq!(euler.len(), 10_001);
    assert_eq!(euler.len(), rk4.len());
    assert_eq!(euler.first(), Some(&Sample::new(0.0, 1.0)));
    assert_eq!(rk4.first(), Some(&Sample::new(0.0, 1.0)));
    assert!(
        euler
            .iter()
            .zip(rk4.iter())
            .all(|(a, b)| a.x.to_bits() == b.x.to_bits())
    );
}

#[test]
fn positions_are_computed_from_the_step_index() {
    let grid = StepGrid::new(0.0, 0.1, 1.0).unwrap();

    let trajectory = integrate(&neg_two_x(), &ForwardEuler, 1.0, &grid).unwrap();

    for (n, sample) in trajectory.iter().enumerate() {
        assert_eq!(sample.x.to_bits(), grid.x_at(n).to_bits());
    }
}

#[test]
fn empty_domain_returns_initial_sample() {
    let grid = StepGrid::new(2.0, 0.1, 2.0).unwrap();

    let solution = solve_unobserved(&neg_two_x(), &RungeKutta4, 3.0, &grid).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.trajectory.samples(), &[Sample::new(2.0, 3.0)]);
}

#[test]
fn observer_can_stop_early() {
    let grid = StepGrid::new(0.0, 0.1, 10.0).unwrap();

    let observer = |event: &Event| (event.step >= 5).then_some(Action::StopEarly);

    let solution = solve(&neg_two_x(), &ForwardEuler, 1.0, &grid, observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.trajectory.len(), 6);
}

#[test]
fn observer_can_stop_before_the_first_step() {
    let grid = StepGrid::new(0.0, 0.1, 10.0).unwrap();

    let observer = |_event: &Event| Some(Action::StopEarly);

    let solution = solve(&neg_two_x(), &RungeKutta4, 1.0, &grid, observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.trajectory.len(), 1);
}

#[test]
fn step_numbers_start_at_zero() {
    let grid = StepGrid::new(0.0, 0.25, 1.0).unwrap();

    let mut step_values = Vec::new();
    solve(&neg_two_x(), &ForwardEuler, 0.0, &grid, |event: &Event| {
        step_values.push(event.step);
        None
    })
    .expect("should solve");

    assert_eq!(step_values, vec![0, 1, 2, 3, 4]);
}

#[derive(Debug, Error)]
#[error("slope undefined at x = {0}")]
struct Undefined(f64);

/// Model of `dy/dx = 1 / (1 - x)`, which fails at its pole.
struct Pole {
    calls: Cell<usize>,
}

impl Model for Pole {
    type Input = Sample;
    type Output = f64;
    type Error = Undefined;

    fn call(&self, input: &Sample) -> Result<f64, Undefined> {
        self.calls.set(self.calls.get() + 1);
        if input.x >= 1.0 {
            return Err(Undefined(input.x));
        }
        Ok(1.0 / (1.0 - input.x))
    }
}

#[test]
fn model_error_reports_failing_step() {
    let grid = StepGrid::new(0.0, 0.25, 2.0).unwrap();
    let model = Pole {
        calls: Cell::new(0),
    };

    let err = integrate(&model, &ForwardEuler, 0.0, &grid).unwrap_err();

    // Euler evaluates at x = 0, 0.25, 0.5, 0.75 and fails at x = 1.0 in step 5.
    let Error::Model { step, source } = err;
    assert_eq!(step, 5);
    assert_eq!(source.to_string(), "slope undefined at x = 1");
    assert_eq!(model.calls.get(), 5);
}

#[test]
fn rk4_stage_failure_is_reported() {
    let grid = StepGrid::new(0.0, 0.5, 2.0).unwrap();
    let model = Pole {
        calls: Cell::new(0),
    };

    let err = integrate(&model, &RungeKutta4, 0.0, &grid).unwrap_err();

    // The fourth stage of step 2 evaluates at x = 0.5 + 0.5 = 1.0.
    assert!(matches!(err, Error::Model { step: 2, .. }));
}
