use crate::error::{GeometryError, Result};
use crate::geometry::Curve;

/// Inserts evenly spaced points so that no segment is longer than
/// `max_segment_length`. Every original vertex is kept.
#[derive(Debug)]
pub struct Subdivide<'a> {
    curve: &'a Curve,
    max_segment_length: f64,
}

impl<'a> Subdivide<'a> {
    /// Creates a new `Subdivide` operation.
    #[must_use]
    pub fn new(curve: &'a Curve, max_segment_length: f64) -> Self {
        Self {
            curve,
            max_segment_length,
        }
    }

    /// Executes the subdivision.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `max_segment_length`
    /// is not a positive finite number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn execute(&self) -> Result<Curve> {
        let max_len = self.max_segment_length;
        if !max_len.is_finite() || max_len <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "max_segment_length",
                value: max_len,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }

        let pts = self.curve.points();
        let mut out = Vec::with_capacity(pts.len());
        out.push(self.curve.start());
        for w in pts.windows(2) {
            let (a, b) = (w[0], w[1]);
            let pieces = (nalgebra::distance(&a, &b) / max_len).ceil().max(1.0) as u32;
            for j in 1..pieces {
                let t = f64::from(j) / f64::from(pieces);
                out.push(a + (b - a) * t);
            }
            out.push(b);
        }
        Ok(Curve::from_transformed(out))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn splits_long_segment() {
        let c = Curve::from_xy(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        let s = Subdivide::new(&c, 0.3).execute().unwrap();
        // ceil(1 / 0.3) = 4 pieces -> 5 points.
        assert_eq!(s.point_count(), 5);
        assert_relative_eq!(s.points()[1].x, 0.25, epsilon = 1e-12);
        for len in s.segment_lengths() {
            assert!(len <= 0.3 + 1e-12, "len={len}");
        }
    }

    #[test]
    fn short_segments_untouched() {
        let c = Curve::from_xy(&[(0.0, 0.0), (0.1, 0.0), (0.1, 0.1)]).unwrap();
        let s = Subdivide::new(&c, 1.0).execute().unwrap();
        assert_eq!(s, c);
    }

    #[test]
    fn keeps_original_vertices() {
        let c = Curve::from_xy(&[(0.0, 0.0), (2.0, 4.0), (18.0, -3.0)]).unwrap();
        let s = Subdivide::new(&c, 0.5).execute().unwrap();
        assert!(s.points().contains(&c.points()[1]));
        assert_eq!(s.end(), c.end());
        assert_relative_eq!(s.length(), c.length(), epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_positive_length() {
        let c = Curve::from_xy(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        assert!(Subdivide::new(&c, 0.0).execute().is_err());
        assert!(Subdivide::new(&c, -1.0).execute().is_err());
        assert!(Subdivide::new(&c, f64::NAN).execute().is_err());
    }
}
