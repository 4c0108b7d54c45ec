use super::params::MIN_SAMPLE_COUNT;
use crate::errors::AirfoilError;

/// Uniformly spaced chord fractions from the leading edge (0.0) to the trailing edge (1.0),
/// shared by the camber, thickness and surface stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSample {
    sample_count: usize,
    xs: Vec<f64>,
}

/// Number of chord stations needed for a closed contour of `sample_count` points. This is
/// ceil(n/2) for odd counts and n/2 for even counts.
pub fn station_count(sample_count: usize) -> usize {
    (sample_count + 1) / 2
}

impl ChordSample {
    pub fn new(sample_count: usize) -> Result<ChordSample, AirfoilError> {
        if sample_count < MIN_SAMPLE_COUNT {
            return Err(AirfoilError::config(
                "sample_count",
                format!("must be at least {}, got {}", MIN_SAMPLE_COUNT, sample_count),
            ));
        }

        let k = station_count(sample_count);
        let last = (k - 1) as f64;
        let xs = (0..k).map(|i| i as f64 / last).collect();

        Ok(ChordSample { sample_count, xs })
    }

    /// The total point count of the contour this sample was built for
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.xs
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.xs.iter()
    }
}
