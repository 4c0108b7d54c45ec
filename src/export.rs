//! Persistence of contour coordinates.
//!
//! The table format is two whitespace separated columns (x, y) with one row per point and no
//! header, written in the same `%.18e` register as numpy's `savetxt`. Lines starting with `#`
//! and blank lines are ignored when reading.

use crate::airfoil::coordinates::AirfoilCoordinates;
use crate::errors::ExportError;
use ncollide2d::na::Point2;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_FILE_NAME: &str = "textfile.txt";

/// Formats like C's `%.18e`: 18 fractional digits and a signed exponent of at least two digits
fn scientific(v: f64) -> String {
    let s = format!("{:.18e}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => format!("{}e{:+03}", mantissa, exp),
            Err(_) => s,
        },
        None => s,
    }
}

pub fn write_table<W: Write>(
    coords: &AirfoilCoordinates,
    writer: &mut W,
) -> Result<(), ExportError> {
    for (x, y) in coords.xy() {
        writeln!(writer, "{} {}", scientific(x), scientific(y))?;
    }
    Ok(())
}

pub fn read_table<R: BufRead>(reader: R) -> Result<Vec<Point2<f64>>, ExportError> {
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let values = trimmed
            .split_whitespace()
            .map(|v| {
                v.parse::<f64>().map_err(|e| ExportError::Parse {
                    line: i + 1,
                    reason: format!("'{}': {}", v, e),
                })
            })
            .collect::<Result<Vec<f64>, ExportError>>()?;

        match values.as_slice() {
            [x, y] => points.push(Point2::new(*x, *y)),
            _ => {
                return Err(ExportError::Parse {
                    line: i + 1,
                    reason: format!("expected 2 columns, found {}", values.len()),
                })
            }
        }
    }
    Ok(points)
}

pub fn save_table<P: AsRef<Path>>(
    coords: &AirfoilCoordinates,
    path: P,
) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_table(coords, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.as_ref().display(), points = coords.len(), "coordinate table written");
    Ok(())
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Vec<Point2<f64>>, ExportError> {
    read_table(BufReader::new(File::open(path)?))
}

/// Writes the contour as a JSON array of tagged points
pub fn write_json<W: Write>(
    coords: &AirfoilCoordinates,
    writer: &mut W,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, coords.points())?;
    writeln!(writer)?;
    Ok(())
}
