use stepwise_core::{Model, Sample};

/// A single-step update rule for `dy/dx = f(x, y)`.
///
/// Given the current sample and the step size, a stepper returns `y` at
/// `x + dx`. The solver owns the grid, so steppers never advance `x`
/// themselves.
pub trait Stepper {
    /// Order of accuracy of the global error.
    fn order(&self) -> u32;

    /// Returns `y` after one step of size `dx` from `at`.
    ///
    /// # Errors
    ///
    /// Returns the model's error if any slope evaluation fails.
    fn step<M>(&self, model: &M, at: Sample, dx: f64) -> Result<f64, M::Error>
    where
        M: Model<Input = Sample, Output = f64>;
}

/// Explicit first-order method: `y_{n+1} = y_n + f(x_n, y_n)·dx`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardEuler;

impl Stepper for ForwardEuler {
    fn order(&self) -> u32 {
        1
    }

    fn step<M>(&self, model: &M, at: Sample, dx: f64) -> Result<f64, M::Error>
    where
        M: Model<Input = Sample, Output = f64>,
    {
        let slope = model.call(&at)?;
        Ok(at.y + slope * dx)
    }
}

/// Classic four-stage Runge-Kutta method.
///
/// ```text
/// k1 = f(x, y)
/// k2 = f(x + dx/2, y + dx/2·k1)
/// k3 = f(x + dx/2, y + dx/2·k2)
/// k4 = f(x + dx, y + dx·k3)
/// y' = y + dx/6·(k1 + 2k2 + 2k3 + k4)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RungeKutta4;

impl Stepper for RungeKutta4 {
    fn order(&self) -> u32 {
        4
    }

    fn step<M>(&self, model: &M, at: Sample, dx: f64) -> Result<f64, M::Error>
    where
        M: Model<Input = Sample, Output = f64>,
    {
        let Sample { x, y } = at;
        let half = dx / 2.0;

        let k1 = model.call(&at)?;
        let k2 = model.call(&Sample::new(x + half, y + half * k1))?;
        let k3 = model.call(&Sample::new(x + half, y + half * k2))?;
        let k4 = model.call(&Sample::new(x + dx, y + dx * k3))?;

        Ok(y + dx / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
    }
}

/// The fixed-step methods available at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ForwardEuler,
    RungeKutta4,
}

impl Stepper for Method {
    fn order(&self) -> u32 {
        match self {
            Self::ForwardEuler => ForwardEuler.order(),
            Self::RungeKutta4 => RungeKutta4.order(),
        }
    }

    fn step<M>(&self, model: &M, at: Sample, dx: f64) -> Result<f64, M::Error>
    where
        M: Model<Input = Sample, Output = f64>,
    {
        match self {
            Self::ForwardEuler => ForwardEuler.step(model, at, dx),
            Self::RungeKutta4 => RungeKutta4.step(model, at, dx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use stepwise_core::Slope;

    #[test]
    fn euler_uses_slope_at_start_of_step() {
        let model = Slope(|x: f64, _y: f64| -2.0 * x);

        let y = ForwardEuler.step(&model, Sample::new(0.5, 1.0), 0.5).unwrap();

        assert_relative_eq!(y, 0.5);
    }

    #[test]
    fn rk4_matches_taylor_series_for_exponential_growth() {
        let model = Slope(|_x: f64, y: f64| y);
        let h: f64 = 0.1;

        let y = RungeKutta4.step(&model, Sample::new(0.0, 1.0), h).unwrap();

        let expected = 1.0 + h + h.powi(2) / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(y, expected, epsilon = 1e-12);
    }

    #[test]
    fn rk4_is_exact_for_quadratic_solutions() {
        let model = Slope(|x: f64, _y: f64| -2.0 * x);

        let y = RungeKutta4.step(&model, Sample::new(0.3, 0.91), 0.2).unwrap();

        // y = 1 - x² evaluated at x = 0.5.
        assert_relative_eq!(y, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn method_dispatches_to_stepper() {
        let model = Slope(|x: f64, y: f64| x.sin() * x.cos() - y);
        let at = Sample::new(0.7, 0.2);

        assert_eq!(
            Method::ForwardEuler.step(&model, at, 0.01),
            ForwardEuler.step(&model, at, 0.01)
        );
        assert_eq!(
            Method::RungeKutta4.step(&model, at, 0.01),
            RungeKutta4.step(&model, at, 0.01)
        );
        assert_eq!(Method::ForwardEuler.order(), 1);
        assert_eq!(Method::RungeKutta4.order(), 4);
    }
}
