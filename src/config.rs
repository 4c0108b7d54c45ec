use crate::airfoil::params::{AirfoilSpec, SurfaceOffset, TrailingEdge};
use crate::errors::{AirfoilError, ConfigError};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SAMPLE_COUNT: usize = 201;

/// Generator settings as read from a TOML file. Every field is optional in the file, missing
/// ones fall back to a NACA 0012 with 201 points.
///
/// ```toml
/// designation = "2412"
/// samples = 101
/// trailing_edge = "open"
/// offset = "vertical"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// A "MPXX" designation, takes precedence over the three percentages when present
    pub designation: Option<String>,
    pub thickness: i32,
    pub camber: i32,
    pub camber_position: i32,
    pub samples: usize,
    pub trailing_edge: TrailingEdge,
    pub offset: SurfaceOffset,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            designation: None,
            thickness: 12,
            camber: 0,
            camber_position: 0,
            samples: DEFAULT_SAMPLE_COUNT,
            trailing_edge: TrailingEdge::Closed,
            offset: SurfaceOffset::Normal,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_spec(&self) -> Result<AirfoilSpec, AirfoilError> {
        let spec = match &self.designation {
            Some(d) => AirfoilSpec::from_designation(d, self.samples)?,
            None => AirfoilSpec::new(
                self.thickness,
                self.camber_position,
                self.camber,
                self.samples,
            )?,
        };
        Ok(spec
            .with_trailing_edge(self.trailing_edge)
            .with_offset(self.offset))
    }
}
