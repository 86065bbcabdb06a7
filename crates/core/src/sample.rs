use std::ops::Index;

/// A point `(x, y)` on a solution curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of samples approximating a solution curve.
///
/// Samples are stored in the order they were produced, which for the fixed-step
/// solvers is strictly increasing in `x`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    /// Creates an empty trajectory with room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Appends a sample.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Returns the samples as a slice.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Returns the `x` coordinate of every sample.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// Returns the `y` coordinate of every sample.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// Returns the samples with `start <= x <= end`, in their original order.
    ///
    /// An empty trajectory is returned if no sample falls inside the bounds,
    /// including when `start > end`.
    #[must_use]
    pub fn within(&self, start: f64, end: f64) -> Self {
        self.samples
            .iter()
            .filter(|s| s.x >= start && s.x <= end)
            .copied()
            .collect()
    }
}

impl From<Vec<Sample>> for Trajectory {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

impl FromIterator<Sample> for Trajectory {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Trajectory {
    type Output = Sample;

    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
