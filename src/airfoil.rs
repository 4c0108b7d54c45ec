use crate::errors::AirfoilError;
use camber::CamberPoint;
use coordinates::AirfoilCoordinates;
use ncollide2d::na::Point2;
use surface::{Side, SurfacePoint};

pub mod camber;
pub mod chord;
pub mod coordinates;
pub mod generate;
pub mod params;
pub mod surface;
pub mod thickness;

/// Everything known about the section at one chord fraction
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CamberStation {
    pub x: f64,
    pub camber: CamberPoint,
    pub half_thickness: f64,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(
        x: f64,
        camber: CamberPoint,
        half_thickness: f64,
        upper: Point2<f64>,
        lower: Point2<f64>,
    ) -> CamberStation {
        CamberStation {
            x,
            camber,
            half_thickness,
            upper,
            lower,
        }
    }

    pub fn camber_point(&self) -> Point2<f64> {
        Point2::new(self.x, self.camber.height)
    }

    /// Returns the first non-finite quantity of the station as an error
    pub fn check_finite(&self) -> Result<(), AirfoilError> {
        let quantities = [
            ("camber height", self.camber.height),
            ("camber slope", self.camber.slope),
            ("half thickness", self.half_thickness),
            ("upper x", self.upper.x),
            ("upper y", self.upper.y),
            ("lower x", self.lower.x),
            ("lower y", self.lower.y),
        ];

        match quantities.iter().find(|(_, v)| !v.is_finite()) {
            Some((quantity, _)) => Err(AirfoilError::NumericDegeneracy {
                quantity: *quantity,
                x: self.x,
            }),
            None => Ok(()),
        }
    }
}

/// A generated section, one station per chord fraction from leading to trailing edge
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    pub stations: Vec<CamberStation>,
    sample_count: usize,
}

impl Airfoil {
    pub fn from_stations(stations: Vec<CamberStation>, sample_count: usize) -> Airfoil {
        Airfoil {
            stations,
            sample_count,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn camber(&self) -> Vec<Point2<f64>> {
        self.stations.iter().map(|s| s.camber_point()).collect()
    }

    pub fn upper(&self) -> Vec<SurfacePoint> {
        self.stations
            .iter()
            .map(|s| SurfacePoint::new(s.upper, Side::Upper))
            .collect()
    }

    pub fn lower(&self) -> Vec<SurfacePoint> {
        self.stations
            .iter()
            .map(|s| SurfacePoint::new(s.lower, Side::Lower))
            .collect()
    }

    pub fn to_outer_contour(&self) -> AirfoilCoordinates {
        AirfoilCoordinates::from_surfaces(&self.upper(), &self.lower(), self.sample_count)
    }
}
