/// Maps a minimized alignment cost to a similarity in `[0, 1]`.
///
/// The cost is averaged over the `points` index-aligned pairs of the two
/// unit-scale curves, giving a residual `r ≥ 0`; the similarity is
/// `exp(-decay_rate · r)`. It is 1 at `r = 0` and decreases strictly
/// toward 0, which it never reaches for a finite residual. A NaN cost
/// scores 0; negative costs are rounding noise and score 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(cost: f64, points: usize, decay_rate: f64) -> f64 {
    if cost.is_nan() {
        return 0.0;
    }
    let residual = cost.max(0.0) / points.max(1) as f64;
    (-decay_rate * residual).exp().clamp(0.0, 1.0)
}
