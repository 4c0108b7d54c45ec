use super::camber::{CamberPoint, CamberProfile, MeanLine};
use super::chord::ChordSample;
use super::params::{AirfoilSpec, SurfaceOffset, TrailingEdge};
use super::surface::compose;
use super::thickness::{ThicknessEnvelope, ThicknessProfile};
use super::Airfoil;
use crate::errors::AirfoilError;
use tracing::{debug, instrument};

/// An AirfoilGenerator is an entity which can generate the height and slope of the mean camber
/// line and the half-thickness of the airfoil at fractions of the chord. This provides the
/// information necessary to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Return the camber line height and slope at a fraction from 0.0 to 1.0
    fn camber_at(&self, x: f64) -> CamberPoint;

    /// Return half of the thickness of the airfoil at a fraction from 0.0 to 1.0
    fn half_thickness(&self, x: f64) -> f64;

    /// How the thickness is laid off from the camber line
    fn offset(&self) -> SurfaceOffset {
        SurfaceOffset::Normal
    }

    /// Generates the stations at each fraction of the chord sample
    fn generate(&self, chord: &ChordSample) -> Result<Airfoil, AirfoilError> {
        let camber = CamberProfile::sample(chord, |x| self.camber_at(x));
        debug!(stations = camber.len(), "camber line sampled");

        let thickness = ThicknessProfile::sample(chord, |x| self.half_thickness(x));
        debug!(max_index = ?thickness.max_index(), "thickness envelope sampled");

        let stations = compose(chord, &camber, &thickness, self.offset())?;
        Ok(Airfoil::from_stations(stations, chord.sample_count()))
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
#[derive(Debug, Clone)]
pub struct Naca4Digit {
    mean_line: MeanLine,
    envelope: ThicknessEnvelope,
    offset: SurfaceOffset,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator. The values are not validated, use `from_spec` for
    /// checked parameters.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this value should be 0.4
    pub fn new(t_max: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            mean_line: MeanLine::new(max_camber, max_camber_chord),
            envelope: ThicknessEnvelope::new(t_max, TrailingEdge::default()),
            offset: SurfaceOffset::default(),
        }
    }

    pub fn from_spec(spec: &AirfoilSpec) -> Naca4Digit {
        Naca4Digit {
            mean_line: MeanLine::new(spec.camber(), spec.camber_position()),
            envelope: ThicknessEnvelope::new(spec.thickness(), spec.trailing_edge()),
            offset: spec.offset(),
        }
    }

    pub fn with_trailing_edge(mut self, trailing_edge: TrailingEdge) -> Self {
        self.envelope = ThicknessEnvelope::new(self.envelope.max_thickness(), trailing_edge);
        self
    }

    pub fn with_offset(mut self, offset: SurfaceOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_at(&self, x: f64) -> CamberPoint {
        self.mean_line.at(x)
    }

    fn half_thickness(&self, x: f64) -> f64 {
        self.envelope.half_thickness(x)
    }

    fn offset(&self) -> SurfaceOffset {
        self.offset
    }
}

/// Runs the full construction for a validated specification
#[instrument(skip(spec), fields(naca = %spec, samples = spec.sample_count()))]
pub fn generate(spec: &AirfoilSpec) -> Result<Airfoil, AirfoilError> {
    let chord = ChordSample::new(spec.sample_count())?;
    let airfoil = Naca4Digit::from_spec(spec).generate(&chord)?;
    debug!(stations = airfoil.stations.len(), "airfoil generated");
    Ok(airfoil)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    #[test_case(1.0000, 0.0013)]
    #[test_case(0.9000, 0.0208)]
    #[test_case(0.7000, 0.0518)]
    #[test_case(0.5000, 0.0724)]
    #[test_case(0.3000, 0.0788)]
    #[test_case(0.2000, 0.0726)]
    #[test_case(0.1000, 0.0563)]
    fn test_naca_4_camber(x: f64, e: f64) {
        let naca = Naca4Digit::new(0.12, 0.02, 0.4).with_trailing_edge(TrailingEdge::Open);
        let t = naca.half_thickness(x);
        let p = naca.camber_at(x);
        assert_relative_eq!(e, t + p.height, epsilon = 1e-3);
    }

    #[test]
    fn naca_0012_eleven_points() {
        let spec = AirfoilSpec::from_designation("0012", 11).unwrap();
        let airfoil = generate(&spec).unwrap();

        let xs: Vec<f64> = airfoil.stations.iter().map(|s| s.x).collect();
        for (e, x) in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0].iter().zip(xs.iter()) {
            assert_relative_eq!(*e, *x, epsilon = 1e-12);
        }
        assert_eq!(0.0, airfoil.stations[0].half_thickness);

        let contour = airfoil.to_outer_contour();
        assert_eq!(11, contour.len());
        assert!(contour.is_closed(1e-12));

        let pts = contour.points();
        for i in 0..5 {
            let upper = &pts[4 - i];
            let lower = &pts[6 + i];
            assert_relative_eq!(upper.x(), lower.x(), epsilon = 1e-12);
            assert_relative_eq!(upper.y(), -lower.y(), epsilon = 1e-12);
        }
    }

    #[test]
    fn vertical_offset_matches_reference_table() {
        let spec = AirfoilSpec::new(12, 40, 2, 21)
            .unwrap()
            .with_offset(SurfaceOffset::Vertical)
            .with_trailing_edge(TrailingEdge::Open);
        let airfoil = generate(&spec).unwrap();

        // Stations are every 0.1 of the chord
        assert_relative_eq!(0.0563, airfoil.stations[1].upper.y, epsilon = 1e-3);
        assert_relative_eq!(0.0788, airfoil.stations[3].upper.y, epsilon = 1e-3);
        assert_relative_eq!(0.0724, airfoil.stations[5].upper.y, epsilon = 1e-3);
    }

    #[test]
    fn zero_position_with_camber_never_computes() {
        let result = AirfoilSpec::new(12, 0, 2, 11);
        assert!(matches!(result, Err(AirfoilError::Configuration { .. })));
    }

    #[test]
    fn unchecked_generator_reports_degeneracy() {
        let chord = ChordSample::new(11).unwrap();
        let naca = Naca4Digit::new(0.12, 0.02, 1.0);
        let result = naca.generate(&chord);
        assert!(matches!(result, Err(AirfoilError::NumericDegeneracy { .. })));
    }

    #[test]
    fn random_symmetric_sections_mirror() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let t = rng.gen_range(1..40);
            let n = rng.gen_range(3..400);
            let offset = if rng.gen_bool(0.5) {
                SurfaceOffset::Normal
            } else {
                SurfaceOffset::Vertical
            };
            let spec = AirfoilSpec::new(t, 0, 0, n).unwrap().with_offset(offset);
            let airfoil = generate(&spec).unwrap();

            for s in airfoil.stations.iter() {
                assert_relative_eq!(s.upper.y, -s.lower.y, epsilon = 1e-12);
                assert_relative_eq!(s.upper.x, s.lower.x, epsilon = 1e-12);
            }

            let expected = if n % 2 == 0 { n - 1 } else { n };
            assert_eq!(expected, airfoil.to_outer_contour().len());
        }
    }

    #[test]
    fn random_cambered_sections_are_finite() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let spec = AirfoilSpec::new(
                rng.gen_range(1..30),
                rng.gen_range(1..10) * 10,
                rng.gen_range(1..10),
                rng.gen_range(3..300),
            )
            .unwrap();
            let airfoil = generate(&spec).unwrap();
            assert!(airfoil.stations.iter().all(|s| s.check_finite().is_ok()));
            assert!(airfoil.stations.iter().all(|s| s.upper.y >= s.lower.y - 1e-12));
        }
    }
}
