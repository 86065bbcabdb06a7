//! A single comparison run, from config to report.

use serde::Serialize;

use stepwise_solvers::fixed_step::{self, ForwardEuler};

use crate::{
    analysis::{self, ErrorPoint, TOP_ERRORS},
    config::SimulationConfig,
    equation::Equation,
    error::Error,
    precision::{self, Verdict},
    reference::Reference,
    window::{self, DEFAULT_RADIUS_STEPS, ZoomWindow},
};

/// Everything a presentation layer needs to display one run.
///
/// Series are index-aligned with their labels: `approx_series[i]` and
/// `reference_series[i]` are the values at `labels[i]`, and likewise for the
/// zoomed series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub equation: Equation,
    pub reference: Reference,

    /// `x` of every sample.
    pub labels: Vec<f64>,

    /// Forward Euler values.
    pub approx_series: Vec<f64>,

    /// Reference values.
    pub reference_series: Vec<f64>,

    /// The largest errors, worst first.
    pub top_errors: Vec<ErrorPoint>,

    /// Interval around the worst error.
    pub zoom: ZoomWindow,
    pub zoom_labels: Vec<f64>,
    pub zoom_approx_series: Vec<f64>,
    pub zoom_reference_series: Vec<f64>,

    /// `round(horizon / dx)`, an estimate of the step count for display.
    ///
    /// This can differ from the number of steps actually taken, for example
    /// when `x0` is not zero.
    pub trial_count: i64,

    /// Decimal places implied by `dx`, for formatting labels.
    pub label_decimals: usize,

    pub verdict: Verdict,
}

/// Compares forward Euler with the configured reference.
///
/// # Algorithm
///
/// 1. Validate the config and build the step grid.
/// 2. Integrate with forward Euler and produce the reference trajectory on the
///    same grid.
/// 3. Rank the pointwise errors and keep the top entries.
/// 4. Center a zoom window on the worst error and filter both trajectories.
/// 5. Check the maximum error against the precision tolerance.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for an invalid config. The other variants
/// of [`Error`] report failures in the individual stages.
pub fn run(config: &SimulationConfig) -> Result<Report, Error> {
    let grid = config.grid()?;
    let tolerance = config.tolerance()?;
    let equation = config.equation;

    log::debug!(
        "comparing forward Euler with {} for {equation} on [{}, {}], dx = {}",
        config.reference.label(),
        config.x0,
        config.horizon,
        config.dx,
    );
    log::trace!("grid has {} steps", grid.steps());

    let approx = fixed_step::integrate(&equation, &ForwardEuler, config.y0, &grid)?;
    let reference = config.reference.trajectory(equation, config.y0, &grid)?;

    let ranked = analysis::analyze(&approx, &reference)?;
    let top_errors = ranked.top(TOP_ERRORS).to_vec();

    let zoom = window::zoom_window(
        &ranked,
        config.x0,
        config.horizon,
        config.dx,
        DEFAULT_RADIUS_STEPS,
    )?;
    let zoom_approx = window::filter_window(&approx, &zoom);
    let zoom_reference = window::filter_window(&reference, &zoom);

    let verdict = precision::evaluate(&ranked, tolerance);
    if verdict.passed {
        log::info!(
            "{equation}: max error {:e} within tolerance {:e}",
            verdict.max_error,
            tolerance.value()
        );
    } else {
        log::warn!(
            "{equation}: max error {:e} exceeds tolerance {:e}",
            verdict.max_error,
            tolerance.value()
        );
    }

    Ok(Report {
        equation,
        reference: config.reference,
        labels: reference.xs(),
        approx_series: approx.ys(),
        reference_series: reference.ys(),
        top_errors,
        zoom,
        zoom_labels: zoom_reference.xs(),
        zoom_approx_series: zoom_approx.ys(),
        zoom_reference_series: zoom_reference.ys(),
        trial_count: trial_count(config.dx, config.horizon),
        label_decimals: label_decimals(config.dx),
        verdict,
    })
}

/// Returns `round(horizon / dx)`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn trial_count(dx: f64, horizon: f64) -> i64 {
    (horizon / dx).round() as i64
}

/// Returns the number of decimal places in the shortest representation of `dx`.
///
/// The result is capped at 15, beyond which `f64` digits are noise.
#[must_use]
pub fn label_decimals(dx: f64) -> usize {
    let text = dx.to_string();
    text.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
        .min(15)
}
