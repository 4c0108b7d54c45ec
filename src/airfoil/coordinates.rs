use super::surface::SurfacePoint;
use ncollide2d::na::Point2;
use ncollide2d::shape::Polyline;
use serde::Serialize;

/// The closed contour of an airfoil: the upper surface from the trailing edge forward to the
/// leading edge, then the lower surface back towards the trailing edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirfoilCoordinates {
    points: Vec<SurfacePoint>,
}

impl AirfoilCoordinates {
    /// Merges the two surfaces, which must both run from leading to trailing edge. The leading
    /// edge point is shared, so the lower surface starts at its second station.
    ///
    /// For an odd `sample_count` the last lower station is replaced by the upper trailing edge
    /// point so that the contour closes exactly on its first point, giving `sample_count` points.
    /// For an even count the lower trailing edge is kept, giving `sample_count - 1` points.
    pub fn from_surfaces(
        upper: &[SurfacePoint],
        lower: &[SurfacePoint],
        sample_count: usize,
    ) -> AirfoilCoordinates {
        let k = upper.len().min(lower.len());
        let closing = (sample_count % 2).min(k);

        let points = upper[..k]
            .iter()
            .rev()
            .chain(lower[1.min(k - closing)..k - closing].iter())
            .chain(upper[k - closing..k].iter())
            .copied()
            .collect();

        AirfoilCoordinates { points }
    }

    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xy(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.x(), p.y()))
    }

    /// True if the last point repeats the first within `tol`
    pub fn is_closed(&self, tol: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() > 1 => {
                ncollide2d::na::distance(&a.point, &b.point) <= tol
            }
            _ => false,
        }
    }

    /// The contour as an ncollide2d polyline for downstream geometric queries
    pub fn to_polyline(&self) -> Polyline<f64> {
        let pts: Vec<Point2<f64>> = self.points.iter().map(|p| p.point).collect();
        Polyline::new(pts, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::surface::Side;
    use test_case::test_case;

    fn surface(k: usize, side: Side) -> Vec<SurfacePoint> {
        let sign = if side == Side::Upper { 1.0 } else { -1.0 };
        (0..k)
            .map(|i| {
                let x = i as f64 / (k - 1) as f64;
                SurfacePoint::new(Point2::new(x, sign * (x * (1.0 - x)).sqrt()), side)
            })
            .collect()
    }

    fn build(n: usize) -> AirfoilCoordinates {
        let k = (n + 1) / 2;
        AirfoilCoordinates::from_surfaces(&surface(k, Side::Upper), &surface(k, Side::Lower), n)
    }

    #[test_case(3, 3)]
    #[test_case(4, 3)]
    #[test_case(10, 9)]
    #[test_case(11, 11)]
    #[test_case(200, 199)]
    #[test_case(201, 201)]
    fn length_by_parity(n: usize, e: usize) {
        assert_eq!(e, build(n).len());
    }

    #[test_case(10)]
    #[test_case(11)]
    fn ordering(n: usize) {
        let k = (n + 1) / 2;
        let c = build(n);
        let pts = c.points();

        // Trailing edge first, leading edge in the middle
        assert_eq!(Side::Upper, pts[0].side);
        assert_eq!(1.0, pts[0].x());
        assert_eq!(0.0, pts[k - 1].x());
        assert!(pts[..k].windows(2).all(|w| w[1].x() < w[0].x()));
        assert!(pts[k..].windows(2).all(|w| w[1].x() > w[0].x()));
        assert!(pts[k..pts.len() - 1].iter().all(|p| p.side == Side::Lower));
    }

    #[test]
    fn odd_count_closes_on_upper_trailing_edge() {
        let c = build(11);
        let last = c.points().last().unwrap();
        assert_eq!(Side::Upper, last.side);
        assert_eq!(c.points()[0], *last);
        assert!(c.is_closed(0.0));
    }

    #[test]
    fn even_count_ends_on_lower_trailing_edge() {
        let c = build(10);
        let last = c.points().last().unwrap();
        assert_eq!(Side::Lower, last.side);
        assert_eq!(1.0, last.x());
    }

    #[test]
    fn polyline_has_one_edge_per_segment() {
        let c = build(11);
        let line = c.to_polyline();
        assert_eq!(11, line.points().len());
        assert_eq!(10, line.edges().len());
    }
}
