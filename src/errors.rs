use thiserror::Error;

/// Errors raised while building an airfoil from its parameters.
#[derive(Debug, Error)]
pub enum AirfoilError {
    /// A parameter was rejected before any geometry was computed.
    #[error("invalid configuration: {parameter} {constraint}")]
    Configuration {
        parameter: &'static str,
        constraint: String,
    },

    /// An intermediate value of the construction was NaN or infinite.
    #[error("numeric degeneracy: {quantity} is not finite at x/c = {x}")]
    NumericDegeneracy { quantity: &'static str, x: f64 },
}

impl AirfoilError {
    pub fn config(parameter: &'static str, constraint: impl Into<String>) -> Self {
        AirfoilError::Configuration {
            parameter,
            constraint: constraint.into(),
        }
    }
}

/// Errors raised by the coordinate table and plot payload writers/readers.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading a generator configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}
