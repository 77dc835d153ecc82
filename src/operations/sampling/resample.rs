use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, MIN_CURVE_POINTS};

/// Resamples a curve to a fixed number of points at equal arc-length spacing.
///
/// The first and last output points are the curve's endpoints; interior
/// points are linearly interpolated on the segment containing their
/// arc-length position. A curve of zero length yields `count` copies of its
/// start point.
#[derive(Debug)]
pub struct Resample<'a> {
    curve: &'a Curve,
    count: usize,
}

impl<'a> Resample<'a> {
    /// Creates a new `Resample` operation producing `count` points.
    #[must_use]
    pub fn new(curve: &'a Curve, count: usize) -> Self {
        Self { curve, count }
    }

    /// Executes the resampling.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `count < 2`.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Curve> {
        let n = self.count;
        if n < MIN_CURVE_POINTS {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "count",
                value: n as f64,
                min: MIN_CURVE_POINTS as f64,
                max: f64::INFINITY,
            }
            .into());
        }

        let pts = self.curve.points();
        let cumulative = cumulative_lengths(self.curve);
        let total = cumulative[cumulative.len() - 1];
        if total <= 0.0 {
            return Ok(Curve::from_transformed(vec![self.curve.start(); n]));
        }

        let step = total / (n - 1) as f64;
        let mut out = Vec::with_capacity(n);
        out.push(self.curve.start());

        // Index of the segment `pts[seg] → pts[seg + 1]` holding the target.
        let mut seg = 0;
        for i in 1..n - 1 {
            let target = step * i as f64;
            while seg + 2 < pts.len() && cumulative[seg + 1] < target {
                seg += 1;
            }
            let seg_len = cumulative[seg + 1] - cumulative[seg];
            let t = if seg_len > 0.0 {
                ((target - cumulative[seg]) / seg_len).clamp(0.0, 1.0)
            } else {
                0.0
            };
            out.push(pts[seg] + (pts[seg + 1] - pts[seg]) * t);
        }

        out.push(self.curve.end());
        Ok(Curve::from_transformed(out))
    }
}

/// Arc length from the start of the curve to each of its points.
fn cumulative_lengths(curve: &Curve) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(curve.point_count());
    cumulative.push(0.0);
    let mut acc = 0.0;
    for len in curve.segment_lengths() {
        acc += len;
        cumulative.push(acc);
    }
    cumulative
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point2;

    fn assert_point(p: Point2, x: f64, y: f64) {
        assert_relative_eq!(p.x, x, epsilon = 1e-10);
        assert_relative_eq!(p.y, y, epsilon = 1e-10);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn straight_line_even_spacing() {
        let c = Curve::from_xy(&[(0.0, 0.0), (4.0, 0.0)]).unwrap();
        let r = Resample::new(&c, 5).execute().unwrap();
        assert_eq!(r.point_count(), 5);
        for (i, p) in r.points().iter().enumerate() {
            assert_point(*p, i as f64, 0.0);
        }
    }

    #[test]
    fn interpolates_across_vertices() {
        // L-shape of total length 4: corner lies exactly on sample 2 of 5.
        let c = Curve::from_xy(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]).unwrap();
        let r = Resample::new(&c, 5).execute().unwrap();
        let p = r.points();
        assert_point(p[0], 0.0, 0.0);
        assert_point(p[1], 1.0, 0.0);
        assert_point(p[2], 2.0, 0.0);
        assert_point(p[3], 2.0, 1.0);
        assert_point(p[4], 2.0, 2.0);
    }

    #[test]
    fn uneven_vertex_density_is_equalized() {
        // Many vertices on the first half, one segment on the second half.
        let c = Curve::from_xy(&[
            (0.0, 0.0),
            (0.5, 0.0),
            (1.0, 0.0),
            (1.5, 0.0),
            (2.0, 0.0),
            (4.0, 0.0),
        ])
        .unwrap();
        let r = Resample::new(&c, 3).execute().unwrap();
        assert_point(r.points()[1], 2.0, 0.0);
        assert_point(r.points()[2], 4.0, 0.0);
    }

    #[test]
    fn keeps_endpoints() {
        let c = Curve::from_xy(&[(0.0, 0.0), (2.0, 4.0), (18.0, -3.0)]).unwrap();
        let r = Resample::new(&c, 50).execute().unwrap();
        assert_eq!(r.point_count(), 50);
        assert_eq!(r.start(), c.start());
        assert_eq!(r.end(), c.end());
        // Chords can only cut the corner at (2, 4).
        assert!(r.length() <= c.length() + 1e-9);
    }

    #[test]
    fn skips_zero_length_segments() {
        let c = Curve::from_xy(&[(0.0, 0.0), (0.0, 0.0), (2.0, 0.0), (2.0, 0.0)]).unwrap();
        let r = Resample::new(&c, 3).execute().unwrap();
        assert_point(r.points()[1], 1.0, 0.0);
        assert_point(r.points()[2], 2.0, 0.0);
    }

    #[test]
    fn zero_length_curve_is_constant() {
        let c = Curve::from_xy(&[(3.0, -1.0), (3.0, -1.0), (3.0, -1.0)]).unwrap();
        let r = Resample::new(&c, 4).execute().unwrap();
        assert_eq!(r.point_count(), 4);
        for p in r.points() {
            assert_point(*p, 3.0, -1.0);
        }
    }

    #[test]
    fn closed_curve_returns_to_start() {
        let c = Curve::from_xy(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).unwrap();
        let r = Resample::new(&c, 5).execute().unwrap();
        assert_point(r.points()[2], 1.0, 1.0);
        assert!(r.is_closed());
    }

    #[test]
    fn count_below_two_is_rejected() {
        let c = Curve::from_xy(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        assert!(Resample::new(&c, 1).execute().is_err());
        assert!(Resample::new(&c, 0).execute().is_err());
    }
}
