use crate::geometry::Curve;

/// Discrete Fréchet distance between two curves.
///
/// The minimum, over all monotone couplings of the two point sequences, of
/// the largest distance between coupled points. Unlike the rotation
/// alignment cost it does not require equal point counts.
#[derive(Debug)]
pub struct FrechetDistance<'a> {
    a: &'a Curve,
    b: &'a Curve,
}

impl<'a> FrechetDistance<'a> {
    /// Creates a new `FrechetDistance` query.
    #[must_use]
    pub fn new(a: &'a Curve, b: &'a Curve) -> Self {
        Self { a, b }
    }

    /// Executes the query.
    ///
    /// Runs in `O(n·m)` time with a single row of `O(m)` memory.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let (a, b) = (self.a.points(), self.b.points());
        let mut row: Vec<f64> = Vec::with_capacity(b.len());

        for (i, pa) in a.iter().enumerate() {
            // `diag` holds the previous row's value at column j - 1.
            let mut diag = f64::INFINITY;
            for (j, pb) in b.iter().enumerate() {
                let d = nalgebra::distance(pa, pb);
                let reach = match (i, j) {
                    (0, 0) => d,
                    (0, _) => row[j - 1].max(d),
                    (_, 0) => row[0].max(d),
                    _ => diag.min(row[j]).min(row[j - 1]).max(d),
                };
                if i == 0 {
                    row.push(reach);
                } else {
                    diag = row[j];
                    row[j] = reach;
                }
            }
        }

        row[row.len() - 1]
    }
}
