use super::chord::ChordSample;

/// Height and slope of the mean camber line at one chord fraction
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CamberPoint {
    pub height: f64,
    pub slope: f64,
}

impl CamberPoint {
    pub fn new(height: f64, slope: f64) -> Self {
        Self { height, slope }
    }
}

/// The two-segment parabolic mean line of the NACA 4-digit family, with `m` the maximum camber
/// and `p` its chordwise location, both as fractions of the chord.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeanLine {
    m: f64,
    p: f64,
}

impl MeanLine {
    pub fn new(max_camber: f64, max_camber_chord: f64) -> Self {
        Self {
            m: max_camber,
            p: max_camber_chord,
        }
    }

    /// Evaluates the mean line at `x`. The trailing edge is evaluated with the aft segment like
    /// every other station, giving a height of zero and a slope of -2m/(1-p) at x = 1.
    pub fn at(&self, x: f64) -> CamberPoint {
        let (m, p) = (self.m, self.p);
        if m == 0.0 {
            CamberPoint::default()
        } else if x < p {
            let k = m / p.powi(2);
            CamberPoint::new(k * (2.0 * p * x - x.powi(2)), 2.0 * k * (p - x))
        } else {
            let k = m / (1.0 - p).powi(2);
            CamberPoint::new(
                k * (1.0 - 2.0 * p + 2.0 * p * x - x.powi(2)),
                2.0 * k * (p - x),
            )
        }
    }
}

/// Mean line values parallel to a `ChordSample`
#[derive(Debug, Clone, PartialEq)]
pub struct CamberProfile(Vec<CamberPoint>);

impl CamberProfile {
    pub fn sample<F>(chord: &ChordSample, f: F) -> Self
    where
        F: Fn(f64) -> CamberPoint,
    {
        CamberProfile(chord.iter().map(|x| f(*x)).collect())
    }

    pub fn as_slice(&self) -> &[CamberPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
