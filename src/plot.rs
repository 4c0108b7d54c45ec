//! The hand-off to an external plotting tool. A `PlotRequest` carries both surfaces separately,
//! the display title and the axis window; a `Renderer` decides what to do with it.

use crate::airfoil::params::AirfoilSpec;
use crate::airfoil::surface::SurfacePoint;
use crate::airfoil::Airfoil;
use crate::errors::ExportError;
use serde::Serialize;
use std::io::Write;

pub const X_RANGE: [f64; 2] = [0.0, 1.0];
pub const Y_RANGE: [f64; 2] = [-0.3, 0.3];

#[derive(Debug, Clone, Serialize)]
pub struct PlotRequest {
    pub title: String,
    pub upper: Vec<SurfacePoint>,
    pub lower: Vec<SurfacePoint>,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
}

impl PlotRequest {
    pub fn new(spec: &AirfoilSpec, airfoil: &Airfoil) -> PlotRequest {
        PlotRequest {
            title: spec.title(),
            upper: airfoil.upper(),
            lower: airfoil.lower(),
            x_range: X_RANGE,
            y_range: Y_RANGE,
            x_label: "x/c".to_string(),
            y_label: "y/c".to_string(),
            grid: true,
        }
    }
}

pub trait Renderer {
    fn render(&mut self, request: &PlotRequest) -> Result<(), ExportError>;
}

/// Renders a plot request as a JSON document for a plotting front end
pub struct JsonPlotWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonPlotWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonPlotWriter<W> {
    fn render(&mut self, request: &PlotRequest) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut self.writer, request)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;

    #[test]
    fn json_payload() {
        let spec = AirfoilSpec::from_designation("2412", 21).unwrap();
        let airfoil = generate(&spec).unwrap();
        let request = PlotRequest::new(&spec, &airfoil);

        let mut renderer = JsonPlotWriter::new(Vec::new());
        renderer.render(&request).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();

        assert_eq!("NACA 2412", value["title"]);
        assert_eq!(11, value["upper"].as_array().unwrap().len());
        assert_eq!(11, value["lower"].as_array().unwrap().len());
        assert_eq!(-0.3, value["y_range"][0].as_f64().unwrap());
        assert_eq!(1.0, value["x_range"][1].as_f64().unwrap());
    }
}
