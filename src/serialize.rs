use ncollide2d::na::Point2;
use serde::Serialize;

/// Serializes an nalgebra point as `{"x": .., "y": ..}`
#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}
