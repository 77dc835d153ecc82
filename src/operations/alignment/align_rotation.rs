use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::Curve;
use crate::math::rotation_2d::{correlation_sums, rotated_squared_distance};
use crate::math::Point2;

/// `1 / φ`, the golden-section bracket shrink factor.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// How the rotation angle between two curves is searched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationSearch {
    /// Any angle; solved in closed form.
    Unrestricted,
    /// Angles in `[-bound, bound]`, narrowed by golden-section search for
    /// `iterations` steps. `iterations = 0` evaluates `θ = 0` only.
    Restricted { bound: f64, iterations: usize },
    /// No rotation; the cost is evaluated at `θ = 0`.
    Fixed,
}

/// Result of a rotation alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    /// Rotation applied to the second curve, in radians.
    pub theta: f64,
    /// Sum of squared index-aligned distances at `theta`.
    pub cost: f64,
}

/// Finds the rotation of curve `b` about the origin that minimizes
/// `Σ ‖aᵢ − R(θ)bᵢ‖²`.
///
/// Both curves are expected to be resampled to the same point count and
/// normalized. In the restricted case only a local minimum inside the bound
/// is guaranteed; an optimum outside the bound yields a boundary-adjacent
/// angle with higher cost.
#[derive(Debug)]
pub struct AlignRotation<'a> {
    a: &'a Curve,
    b: &'a Curve,
    search: RotationSearch,
}

impl<'a> AlignRotation<'a> {
    /// Creates a new `AlignRotation` operation.
    #[must_use]
    pub fn new(a: &'a Curve, b: &'a Curve, search: RotationSearch) -> Self {
        Self { a, b, search }
    }

    /// Executes the alignment.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the curves have different
    /// point counts.
    pub fn execute(&self) -> Result<Alignment> {
        if self.a.point_count() != self.b.point_count() {
            return Err(OperationError::InvalidInput(format!(
                "curves must have equal point counts, got {} and {}",
                self.a.point_count(),
                self.b.point_count()
            ))
            .into());
        }
        let (a, b) = (self.a.points(), self.b.points());

        let alignment = match self.search {
            RotationSearch::Unrestricted => closed_form(a, b),
            RotationSearch::Restricted { bound, iterations } => {
                golden_section(a, b, bound.abs(), iterations)
            }
            RotationSearch::Fixed => at_angle(a, b, 0.0),
        };
        Ok(alignment)
    }
}

fn at_angle(a: &[Point2], b: &[Point2], theta: f64) -> Alignment {
    Alignment {
        theta,
        cost: rotated_squared_distance(a, b, theta),
    }
}

/// `C(θ) = Σ|a|² + Σ|b|² − 2(P cos θ + Q sin θ)` is minimized at `atan2(Q, P)`.
fn closed_form(a: &[Point2], b: &[Point2]) -> Alignment {
    let (p, q) = correlation_sums(a, b);
    at_angle(a, b, q.atan2(p))
}

fn golden_section(a: &[Point2], b: &[Point2], bound: f64, iterations: usize) -> Alignment {
    let mut best = at_angle(a, b, 0.0);
    if iterations == 0 {
        return best;
    }

    let (mut lo, mut hi) = (-bound, bound);
    let mut x1 = at_angle(a, b, hi - INV_PHI * (hi - lo));
    let mut x2 = at_angle(a, b, lo + INV_PHI * (hi - lo));

    for step in 0..iterations {
        if x1.cost <= x2.cost {
            hi = x2.theta;
            x2 = x1;
            x1 = at_angle(a, b, hi - INV_PHI * (hi - lo));
        } else {
            lo = x1.theta;
            x1 = x2;
            x2 = at_angle(a, b, lo + INV_PHI * (hi - lo));
        }
        trace!(step, lo, hi, "narrowed rotation bracket");
    }

    for candidate in [x1, x2] {
        if candidate.cost < best.cost {
            best = candidate;
        }
    }
    best
}
