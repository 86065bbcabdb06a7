//! Pointwise error between an approximate and a reference trajectory.

use serde::Serialize;
use thiserror::Error;

use stepwise_core::{Sample, Trajectory};

/// Differences smaller than this are treated as rounding noise and reported as zero.
pub const ROUNDING_FLOOR: f64 = 1e-10;

/// Number of entries in the "top errors" table.
pub const TOP_ERRORS: usize = 5;

/// Absolute error of the approximation at one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorPoint {
    pub x: f64,
    pub error: f64,
}

impl ErrorPoint {
    /// Compares two samples taken at the same grid index.
    ///
    /// The point is placed at the reference sample's `x`. A difference that is
    /// not a number (a diverged trajectory) is reported as infinite.
    #[must_use]
    pub fn between(approx: &Sample, reference: &Sample) -> Self {
        let diff = (approx.y - reference.y).abs();
        let error = if diff.is_nan() {
            f64::INFINITY
        } else if diff < ROUNDING_FLOOR {
            0.0
        } else {
            diff
        };
        Self {
            x: reference.x,
            error,
        }
    }
}

/// The trajectories passed to [`analyze`] have different lengths.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("trajectory length mismatch: {approx} approximate vs {reference} reference samples")]
pub struct LengthMismatch {
    pub approx: usize,
    pub reference: usize,
}

/// Error points sorted by descending error.
///
/// Points with equal error appear in no particular order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedErrors {
    points: Vec<ErrorPoint>,
}

impl RankedErrors {
    /// Ranks a set of error points.
    #[must_use]
    pub fn new(mut points: Vec<ErrorPoint>) -> Self {
        points.sort_unstable_by(|a, b| b.error.total_cmp(&a.error));
        Self { points }
    }

    /// Returns up to `k` of the largest errors.
    #[must_use]
    pub fn top(&self, k: usize) -> &[ErrorPoint] {
        &self.points[..k.min(self.points.len())]
    }

    /// Returns the point with the largest error.
    #[must_use]
    pub fn peak(&self) -> Option<&ErrorPoint> {
        self.points.first()
    }

    /// Returns the largest error over every point, or zero if there are none.
    ///
    /// This scans the whole list rather than trusting the ranking.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.points.iter().map(|p| p.error).fold(0.0, f64::max)
    }

    #[must_use]
    pub fn points(&self) -> &[ErrorPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pairs samples by index and ranks their absolute errors.
///
/// # Errors
///
/// Returns [`LengthMismatch`] if the trajectories differ in length, which means
/// they were not produced on the same grid.
pub fn analyze(
    approx: &Trajectory,
    reference: &Trajectory,
) -> Result<RankedErrors, LengthMismatch> {
    if approx.len() != reference.len() {
        return Err(LengthMismatch {
            approx: approx.len(),
            reference: reference.len(),
        });
    }

    let points = approx
        .iter()
        .zip(reference)
        .map(|(a, r)| ErrorPoint::between(a, r))
        .collect();

    Ok(RankedErrors::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn trajectory(ys: &[f64]) -> Trajectory {
        ys.iter()
            .enumerate()
            .map(|(n, &y)| Sample::new(n as f64 * 0.1, y))
            .collect()
    }

    #[test]
    fn ranks_by_descending_error() {
        let approx = trajectory(&[1.0, 1.2, 0.5, 2.0]);
        let reference = trajectory(&[1.0, 1.0, 1.0, 1.0]);

        let ranked = analyze(&approx, &reference).unwrap();

        let errors: Vec<f64> = ranked.points().iter().map(|p| p.error).collect();
        assert_eq!(ranked.len(), 4);
        assert!(errors.windows(2).all(|w| w[0] >= w[1]));
        assert_relative_eq!(ranked.peak().unwrap().x, 0.3);
        assert_relative_eq!(ranked.max_error(), 1.0);
    }

    #[test]
    fn differences_below_floor_are_zero() {
        let approx = trajectory(&[1.0 + 5e-11, 1.0 + 2e-10]);
        let reference = trajectory(&[1.0, 1.0]);

        let ranked = analyze(&approx, &reference).unwrap();

        assert!(ranked.points()[0].error > 0.0);
        assert_eq!(ranked.points()[1].error, 0.0);
        assert_relative_eq!(ranked.points()[1].x, 0.0);
    }

    #[test]
    fn errors_are_never_negative() {
        let approx = trajectory(&[-3.0, 0.0, 4.5, -0.25]);
        let reference = trajectory(&[3.0, -1.0, 4.0, 0.25]);

        let ranked = analyze(&approx, &reference).unwrap();

        assert!(ranked.points().iter().all(|p| p.error >= 0.0));
    }

    #[test]
    fn top_is_clamped_to_length() {
        let approx = trajectory(&[1.0, 2.0, 3.0]);
        let reference = trajectory(&[0.0, 0.0, 0.0]);

        let ranked = analyze(&approx, &reference).unwrap();

        assert_eq!(ranked.top(TOP_ERRORS).len(), 3);
        assert_eq!(ranked.top(1), &[ErrorPoint { x: 0.2, error: 3.0 }]);
        assert!(ranked.top(0).is_empty());
    }

    #[test]
    fn single_sample_yields_single_point() {
        let ranked = analyze(&trajectory(&[1.0]), &trajectory(&[1.0])).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked.max_error(), 0.0);
    }

    #[test]
    fn empty_trajectories_yield_empty_ranking() {
        let ranked = analyze(&Trajectory::default(), &Trajectory::default()).unwrap();

        assert!(ranked.is_empty());
        assert!(ranked.peak().is_none());
        assert_eq!(ranked.max_error(), 0.0);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = analyze(&trajectory(&[1.0, 2.0]), &trajectory(&[1.0])).unwrap_err();

        assert_eq!(
            err,
            LengthMismatch {
                approx: 2,
                reference: 1
            }
        );
    }

    #[test]
    fn diverged_samples_rank_first() {
        let approx = trajectory(&[1.0, f64::NAN, 1.5]);
        let reference = trajectory(&[1.0, 1.0, 1.0]);

        let ranked = analyze(&approx, &reference).unwrap();

        assert_eq!(ranked.peak().unwrap().error, f64::INFINITY);
        assert_eq!(ranked.max_error(), f64::INFINITY);
    }
}
