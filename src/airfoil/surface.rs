use super::camber::{CamberPoint, CamberProfile};
use super::chord::ChordSample;
use super::params::SurfaceOffset;
use super::thickness::ThicknessProfile;
use super::CamberStation;
use crate::errors::AirfoilError;
use crate::serialize::Point2f64;
use itertools::izip;
use ncollide2d::na::Point2;
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Upper,
    Lower,
}

/// A point on the airfoil contour tagged with the surface it belongs to
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SurfacePoint {
    #[serde(with = "Point2f64")]
    pub point: Point2<f64>,
    pub side: Side,
}

impl SurfacePoint {
    pub fn new(point: Point2<f64>, side: Side) -> Self {
        Self { point, side }
    }

    pub fn x(&self) -> f64 {
        self.point.x
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }
}

/// Lays the half-thickness `yt` off from the camber point at `x`, returning the (upper, lower)
/// surface points.
pub fn offset_points(
    x: f64,
    camber: &CamberPoint,
    yt: f64,
    offset: SurfaceOffset,
) -> (Point2<f64>, Point2<f64>) {
    let theta = match offset {
        SurfaceOffset::Normal => camber.slope.atan(),
        SurfaceOffset::Vertical => 0.0,
    };
    let (sin, cos) = theta.sin_cos();

    (
        Point2::new(x - yt * sin, camber.height + yt * cos),
        Point2::new(x + yt * sin, camber.height - yt * cos),
    )
}

/// Combines the camber and thickness profiles into one station per chord fraction. Fails on
/// the first station holding a non-finite value.
pub fn compose(
    chord: &ChordSample,
    camber: &CamberProfile,
    thickness: &ThicknessProfile,
    offset: SurfaceOffset,
) -> Result<Vec<CamberStation>, AirfoilError> {
    izip!(chord.iter(), camber.as_slice(), thickness.as_slice())
        .map(|(x, c, yt)| {
            let (upper, lower) = offset_points(*x, c, *yt, offset);
            let station = CamberStation::new(*x, *c, *yt, upper, lower);
            station.check_finite().map(|_| station)
        })
        .collect()
}
