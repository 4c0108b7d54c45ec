use super::chord::ChordSample;
use super::params::TrailingEdge;

/// Coefficients a0..a4 of the NACA half-thickness polynomial
/// yt = (t / 0.2) * (a0 sqrt(x) + a1 x + a2 x^2 + a3 x^3 + a4 x^4)
pub const CLOSED_TE_COEFFICIENTS: [f64; 5] = [0.2969, -0.1260, -0.3516, 0.2843, -0.1036];
pub const OPEN_TE_COEFFICIENTS: [f64; 5] = [0.2969, -0.1260, -0.3516, 0.2843, -0.1015];

impl TrailingEdge {
    pub fn coefficients(&self) -> [f64; 5] {
        match self {
            TrailingEdge::Closed => CLOSED_TE_COEFFICIENTS,
            TrailingEdge::Open => OPEN_TE_COEFFICIENTS,
        }
    }
}

/// The symmetric thickness distribution for a maximum thickness `t` (fraction of chord).
///
/// With the closed coefficient set the half-thickness at x = 1 is only zero up to rounding of
/// the coefficient sum, it is not forced to exactly 0.0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThicknessEnvelope {
    t: f64,
    a: [f64; 5],
}

impl ThicknessEnvelope {
    pub fn new(t_max: f64, trailing_edge: TrailingEdge) -> Self {
        Self {
            t: t_max,
            a: trailing_edge.coefficients(),
        }
    }

    pub fn max_thickness(&self) -> f64 {
        self.t
    }

    /// Half of the section thickness at chord fraction `x`
    pub fn half_thickness(&self, x: f64) -> f64 {
        let a = &self.a;
        let poly = a[0] * x.sqrt() + x * (a[1] + x * (a[2] + x * (a[3] + x * a[4])));
        (self.t / 0.2) * poly
    }
}

/// Half-thickness values parallel to a `ChordSample`
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessProfile(Vec<f64>);

impl ThicknessProfile {
    pub fn sample<F>(chord: &ChordSample, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        ThicknessProfile(chord.iter().map(|x| f(*x)).collect())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the thickest station
    pub fn max_index(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }
}
