use crate::geometry::Curve;
use crate::math::Point2;

/// Centers a curve on its centroid and scales it to unit RMS radius.
///
/// A curve whose points all coincide is only translated (scale factor 1).
#[derive(Debug)]
pub struct Normalize<'a> {
    curve: &'a Curve,
}

impl<'a> Normalize<'a> {
    /// Creates a new `Normalize` operation.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve }
    }

    /// Executes the normalization.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Curve {
        let centroid = self.curve.centroid().coords;
        let centered: Vec<Point2> = self
            .curve
            .points()
            .iter()
            .map(|p| Point2::from(p.coords - centroid))
            .collect();

        let mean_sq = centered
            .iter()
            .map(|p| p.coords.norm_squared())
            .sum::<f64>()
            / centered.len() as f64;
        let scale = if mean_sq > 0.0 { mean_sq.sqrt().recip() } else { 1.0 };

        Curve::from_transformed(
            centered
                .into_iter()
                .map(|p| Point2::from(p.coords * scale))
                .collect(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[allow(clippy::cast_precision_loss)]
    fn rms_radius(c: &Curve) -> f64 {
        let sum: f64 = c.points().iter().map(|p| p.coords.norm_squared()).sum();
        (sum / c.point_count() as f64).sqrt()
    }

    #[test]
    fn centers_and_scales() {
        let c = Curve::from_xy(&[(10.0, 10.0), (14.0, 10.0), (14.0, 13.0)]).unwrap();
        let n = Normalize::new(&c).execute();
        let centroid = n.centroid();
        assert_relative_eq!(centroid.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(centroid.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rms_radius(&n), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn scale_and_translation_invariant() {
        let c = Curve::from_xy(&[(0.0, 0.0), (2.0, 4.0), (18.0, -3.0)]).unwrap();
        let moved = c
            .translated(&crate::math::Vector2::new(-2000.0, 35.0))
            .scaled(2000.0);
        let a = Normalize::new(&c).execute();
        let b = Normalize::new(&moved).execute();
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert_relative_eq!(pa.x, pb.x, epsilon = 1e-9);
            assert_relative_eq!(pa.y, pb.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn two_point_segment_maps_to_unit_offsets() {
        let c = Curve::from_xy(&[(0.0, 0.0), (4.0, 0.0)]).unwrap();
        let n = Normalize::new(&c).execute();
        assert_relative_eq!(n.points()[0].x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(n.points()[1].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_only_translate() {
        let c = Curve::from_xy(&[(5.0, 5.0), (5.0, 5.0)]).unwrap();
        let n = Normalize::new(&c).execute();
        for p in n.points() {
            assert_eq!(*p, Point2::origin());
        }
    }
}
