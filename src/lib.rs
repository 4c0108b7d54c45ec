//! Surface coordinates of NACA 4-digit airfoils.
//!
//! The construction runs strictly forward: a validated [`AirfoilSpec`] is sampled along the
//! chord, the mean camber line and thickness envelope are evaluated at each station, the two
//! are combined into upper and lower surfaces, and the surfaces are merged into a single closed
//! contour ready for export or plotting.
//!
//! ```
//! use naca4_rs::airfoil::generate::generate;
//! use naca4_rs::airfoil::params::AirfoilSpec;
//!
//! let spec = AirfoilSpec::from_designation("2412", 201).unwrap();
//! let contour = generate(&spec).unwrap().to_outer_contour();
//! assert_eq!(201, contour.len());
//! ```

pub mod airfoil;
pub mod config;
pub mod errors;
pub mod export;
pub mod logging;
pub mod plot;
pub mod serialize;

pub use airfoil::params::AirfoilSpec;
pub use errors::AirfoilError;
