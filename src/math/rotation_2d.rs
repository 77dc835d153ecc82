use nalgebra::Rotation2;

use super::Point2;

/// Rotates `p` counter-clockwise about the origin by `theta` radians.
#[must_use]
pub fn rotate_point(p: &Point2, theta: f64) -> Point2 {
    Rotation2::new(theta) * p
}

/// Returns the dot and cross correlation sums `(P, Q)` of two index-aligned
/// point sequences.
///
/// `P = Σ aᵢ·bᵢ` and `Q = Σ bᵢ × aᵢ` (z of the 2D cross product). For a
/// counter-clockwise rotation `R(θ)` applied to `b`,
/// `Σ aᵢ·R(θ)bᵢ = P cos θ + Q sin θ`.
#[must_use]
pub fn correlation_sums(a: &[Point2], b: &[Point2]) -> (f64, f64) {
    a.iter().zip(b).fold((0.0, 0.0), |(p, q), (pa, pb)| {
        (
            p + pa.coords.dot(&pb.coords),
            q + pb.x * pa.y - pb.y * pa.x,
        )
    })
}

/// Sum of squared distances between `a[i]` and `b[i]` rotated by `theta`.
#[must_use]
pub fn rotated_squared_distance(a: &[Point2], b: &[Point2], theta: f64) -> f64 {
    let rot = Rotation2::new(theta);
    a.iter()
        .zip(b)
        .map(|(pa, pb)| (pa - rot * pb).norm_squared())
        .sum()
}
