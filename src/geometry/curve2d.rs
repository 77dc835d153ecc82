use crate::error::{GeometryError, Result};
use crate::math::rotation_2d::rotate_point;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Minimum number of points of a curve.
pub const MIN_CURVE_POINTS: usize = 2;

/// An ordered planar polyline.
///
/// Point order defines the traversal and its arc length; a curve is not a
/// point set. Closed curves repeat the first point as the last.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point2>,
}

impl Curve {
    /// Creates a curve from an ordered point sequence.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than two points are given,
    /// or `GeometryError::NonFiniteCoordinate` if any coordinate is NaN or
    /// infinite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < MIN_CURVE_POINTS {
            return Err(GeometryError::TooFewPoints {
                min: MIN_CURVE_POINTS,
                actual: points.len(),
            }
            .into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFiniteCoordinate { index }.into());
        }
        Ok(Self { points })
    }

    /// Creates a curve from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Curve::new`].
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Wraps points produced by a transform of an existing curve, which
    /// preserves the point count.
    pub(crate) fn from_transformed(points: Vec<Point2>) -> Self {
        debug_assert!(points.len() >= MIN_CURVE_POINTS);
        Self { points }
    }

    /// Returns the points of the curve in traversal order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments (`point_count - 1`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the first point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Returns the last point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Returns the lengths of each consecutive segment.
    pub fn segment_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
    }

    /// Returns the total arc length of the polyline.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segment_lengths().sum()
    }

    /// Returns whether the last point coincides with the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        nalgebra::distance(&self.start(), &self.end()) < TOLERANCE
    }

    /// Returns the arithmetic mean of the points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point2 {
        let sum = self
            .points
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords);
        Point2::from(sum / self.points.len() as f64)
    }

    /// Returns the largest absolute coordinate over all points.
    #[must_use]
    pub fn max_abs_coordinate(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.coords.amax())
            .fold(0.0, f64::max)
    }

    /// Returns the curve divided by its largest absolute coordinate, so every
    /// coordinate lies in `[-1, 1]`. A curve at the origin is returned as is.
    ///
    /// Squared distances of the result cannot overflow or underflow, whatever
    /// the magnitude of the input.
    #[must_use]
    pub fn to_unit_extent(&self) -> Self {
        let extent = self.max_abs_coordinate();
        if extent > 0.0 {
            Self::from_transformed(
                self.points
                    .iter()
                    .map(|p| Point2::from(p.coords / extent))
                    .collect(),
            )
        } else {
            self.clone()
        }
    }

    /// Returns the curve rotated counter-clockwise about the origin by `theta`
    /// radians: `x' = x cos θ − y sin θ`, `y' = x sin θ + y cos θ`.
    #[must_use]
    pub fn rotated(&self, theta: f64) -> Self {
        Self::from_transformed(self.points.iter().map(|p| rotate_point(p, theta)).collect())
    }

    /// Returns the curve translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self::from_transformed(self.points.iter().map(|p| p + offset).collect())
    }

    /// Returns the curve scaled about the origin by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_transformed(
            self.points
                .iter()
                .map(|p| Point2::from(p.coords * factor))
                .collect(),
        )
    }
}
