//! Zoom window around the point of maximum error.

use serde::Serialize;
use thiserror::Error;

use stepwise_core::Trajectory;

use crate::analysis::RankedErrors;

/// Default half-width of the zoom window, in steps.
pub const DEFAULT_RADIUS_STEPS: u32 = 5;

/// An inclusive interval `[start, end]` of `x` for detailed inspection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomWindow {
    pub start: f64,
    pub end: f64,
}

/// A zoom window was requested without any error points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no error points to center a zoom window on")]
pub struct NoData;

impl ZoomWindow {
    /// Returns true if `x` lies inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Centers a window of `radius_steps` steps on each side of the worst error.
///
/// The window is clamped to `[x0, horizon]`. The peak itself always stays
/// inside: when the last sample overshoots the horizon and carries the largest
/// error, the window ends at that sample instead of at the horizon.
///
/// # Errors
///
/// Returns [`NoData`] if `ranked` is empty.
pub fn zoom_window(
    ranked: &RankedErrors,
    x0: f64,
    horizon: f64,
    dx: f64,
    radius_steps: u32,
) -> Result<ZoomWindow, NoData> {
    let peak = ranked.peak().ok_or(NoData)?.x;
    let radius = dx * f64::from(radius_steps);

    Ok(ZoomWindow {
        start: x0.max(peak - radius).min(peak),
        end: horizon.min(peak + radius).max(peak),
    })
}

/// Returns the samples of `trajectory` inside `window`, in order.
#[must_use]
pub fn filter_window(trajectory: &Trajectory, window: &ZoomWindow) -> Trajectory {
    trajectory.within(window.start, window.end)
}
