use thiserror::Error;

/// Upper bound on the number of steps a single grid may contain.
///
/// A step size far smaller than the domain would otherwise allocate and
/// iterate without a practical bound.
pub const MAX_STEPS: usize = 10_000_000;

/// A uniform grid `x_n = x0 + n·dx` covering `[x0, horizon]`.
///
/// The grid ends at the first point with `x >= horizon`, so the final point may
/// overshoot the horizon by less than one step. Positions are computed from the
/// step index rather than by accumulating `dx`, which keeps every solver run on
/// the same grid index-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepGrid {
    start: f64,
    step_size: f64,
    horizon: f64,
    steps: usize,
}

/// Errors that can occur when constructing a [`StepGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("step size must be finite and positive, got {0}")]
    Step(f64),

    #[error("grid bounds must be finite")]
    Bounds,

    #[error("grid would need more than {max} steps", max = MAX_STEPS)]
    TooManySteps,
}

impl StepGrid {
    /// Creates a grid from `start` to `horizon` with spacing `step_size`.
    ///
    /// A horizon at or before `start` yields a grid with zero steps, containing
    /// only the initial point.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_size` is not finite and positive, if either
    /// bound is not finite, or if the grid would exceed [`MAX_STEPS`].
    pub fn new(start: f64, step_size: f64, horizon: f64) -> Result<Self, GridError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(GridError::Step(step_size));
        }
        if !start.is_finite() || !horizon.is_finite() {
            return Err(GridError::Bounds);
        }

        let steps = count_steps(start, step_size, horizon)?;

        Ok(Self {
            start,
            step_size,
            horizon,
            steps,
        })
    }

    /// Returns the initial `x`.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the step size `dx`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the horizon the grid was built to reach.
    #[must_use]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the number of steps, one less than the number of points.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of points, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// Always false: a grid contains at least its initial point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `x0 + n·dx`.
    #[must_use]
    pub fn x_at(&self, n: usize) -> f64 {
        position(self.start, self.step_size, n)
    }

    /// Returns the last grid position, which is `>= horizon` unless the grid is empty.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.x_at(self.steps)
    }
}

#[allow(clippy::cast_precision_loss)]
fn position(start: f64, step_size: f64, n: usize) -> f64 {
    start + n as f64 * step_size
}

/// Finds the smallest `n` with `start + n·dx >= horizon`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_steps(start: f64, step_size: f64, horizon: f64) -> Result<usize, GridError> {
    if horizon <= start {
        return Ok(0);
    }

    let estimate = ((horizon - start) / step_size).ceil();
    if !estimate.is_finite() || estimate > MAX_STEPS as f64 {
        return Err(GridError::TooManySteps);
    }

    // The estimate can be off by one in either direction after rounding.
    let mut n = estimate as usize;
    while n > 0 && position(start, step_size, n - 1) >= horizon {
        n -= 1;
    }
    while position(start, step_size, n) < horizon {
        n += 1;
    }

    if n > MAX_STEPS {
        return Err(GridError::TooManySteps);
    }
    Ok(n)
}
