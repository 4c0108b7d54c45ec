use crate::errors::AirfoilError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The smallest total point count which still yields two chord stations.
pub const MIN_SAMPLE_COUNT: usize = 3;

/// Selects the last coefficient of the thickness polynomial. The closed variant brings the
/// half-thickness to (nearly) zero at the trailing edge, the open variant leaves a small finite
/// trailing edge thickness as in the original NACA definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingEdge {
    #[default]
    Closed,
    Open,
}

/// Selects how the half-thickness is laid off from the mean camber line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceOffset {
    /// Offset perpendicular to the camber line, rotated by atan(dyc/dx)
    #[default]
    Normal,

    /// Offset straight up and down from the camber line, ignoring its slope
    Vertical,
}

/// A validated set of NACA 4-digit parameters together with the total number of points to
/// produce on the closed contour.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilSpec {
    thickness_percent: u32,
    camber_position_percent: u32,
    camber_percent: u32,
    sample_count: usize,
    trailing_edge: TrailingEdge,
    offset: SurfaceOffset,
}

impl AirfoilSpec {
    /// Create a new airfoil specification.
    ///
    /// # Arguments
    ///
    /// * `thickness_percent` - maximum thickness in % of chord, 12 for a NACA 2412
    ///
    /// * `camber_position_percent` - location of the maximum camber in % of chord, 40 for a
    /// NACA 2412
    ///
    /// * `camber_percent` - maximum camber in % of chord, 2 for a NACA 2412
    ///
    /// * `sample_count` - total number of points on the output contour
    pub fn new(
        thickness_percent: i32,
        camber_position_percent: i32,
        camber_percent: i32,
        sample_count: usize,
    ) -> Result<AirfoilSpec, AirfoilError> {
        let thickness_percent = percentage("thickness", thickness_percent)?;
        let camber_position_percent = percentage("camber_position", camber_position_percent)?;
        let camber_percent = percentage("camber", camber_percent)?;

        if sample_count < MIN_SAMPLE_COUNT {
            return Err(AirfoilError::config(
                "sample_count",
                format!("must be at least {}, got {}", MIN_SAMPLE_COUNT, sample_count),
            ));
        }

        // The mean line divides by p^2 forward of p and by (1 - p)^2 aft of it
        let off_chord = camber_position_percent == 0 || camber_position_percent >= 100;
        if camber_percent > 0 && off_chord {
            return Err(AirfoilError::config(
                "camber_position",
                format!(
                    "must be strictly between 0 and 100 when camber is nonzero, got {} \
                     with camber {}",
                    camber_position_percent, camber_percent
                ),
            ));
        }

        Ok(AirfoilSpec {
            thickness_percent,
            camber_position_percent,
            camber_percent,
            sample_count,
            trailing_edge: TrailingEdge::default(),
            offset: SurfaceOffset::default(),
        })
    }

    /// Parse a designation such as "2412" or "NACA 0012". The second digit is the camber
    /// position in tenths of the chord.
    pub fn from_designation(
        designation: &str,
        sample_count: usize,
    ) -> Result<AirfoilSpec, AirfoilError> {
        let trimmed = designation.trim();
        let digits = trimmed
            .strip_prefix("NACA")
            .or_else(|| trimmed.strip_prefix("naca"))
            .unwrap_or(trimmed)
            .trim();

        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AirfoilError::config(
                "designation",
                format!("must be four digits MPXX, got '{}'", designation),
            ));
        }

        let d: Vec<i32> = digits.bytes().map(|b| (b - b'0') as i32).collect();
        AirfoilSpec::new(d[2] * 10 + d[3], d[1] * 10, d[0], sample_count)
    }

    pub fn with_trailing_edge(mut self, trailing_edge: TrailingEdge) -> Self {
        self.trailing_edge = trailing_edge;
        self
    }

    pub fn with_offset(mut self, offset: SurfaceOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Maximum thickness as a fraction of chord (t)
    pub fn thickness(&self) -> f64 {
        self.thickness_percent as f64 / 100.0
    }

    /// Maximum camber as a fraction of chord (m)
    pub fn camber(&self) -> f64 {
        self.camber_percent as f64 / 100.0
    }

    /// Location of maximum camber as a fraction of chord (p)
    pub fn camber_position(&self) -> f64 {
        self.camber_position_percent as f64 / 100.0
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn trailing_edge(&self) -> TrailingEdge {
        self.trailing_edge
    }

    pub fn offset(&self) -> SurfaceOffset {
        self.offset
    }

    pub fn is_symmetric(&self) -> bool {
        self.camber_percent == 0
    }

    /// The display title, e.g. "NACA 2412". Positions which are not whole tenths of the chord
    /// are written with their fractional digit.
    pub fn title(&self) -> String {
        format!("NACA {}", self)
    }
}

impl Display for AirfoilSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let position = if self.camber_position_percent % 10 == 0 {
            format!("{}", self.camber_position_percent / 10)
        } else {
            format!("{}", self.camber_position_percent as f64 / 10.0)
        };
        write!(f, "{}{}{:02}", self.camber_percent, position, self.thickness_percent)
    }
}

fn percentage(parameter: &'static str, value: i32) -> Result<u32, AirfoilError> {
    if (0..=100).contains(&value) {
        Ok(value as u32)
    } else {
        Err(AirfoilError::config(
            parameter,
            format!("must be a percentage between 0 and 100, got {}", value),
        ))
    }
}
