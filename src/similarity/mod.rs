pub mod options;
mod score;

pub use options::SimilarityOptions;
pub use score::score;

use tracing::debug;

use crate::error::Result;
use crate::geometry::Curve;
use crate::operations::{AlignRotation, Normalize, Resample};

/// Outcome of a shape comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Similarity in `[0, 1]`.
    pub similarity: f64,
    /// Rotation applied to the second curve to align it with the first.
    pub rotation: f64,
    /// Minimized sum of squared distances between the normalized curves.
    pub cost: f64,
}

/// Compares two curves up to translation, uniform scale and rotation.
///
/// # Algorithm
///
/// 1. Validate the options
/// 2. Divide each curve by its largest absolute coordinate, then resample
///    it to `estimation_points` points at equal arc-length spacing
/// 3. Normalize both to zero centroid and unit RMS radius
/// 4. Align the second curve's rotation to the first (closed form, or a
///    bounded search when the rotation is restricted)
/// 5. Score the residual cost
///
/// Reflections are not matched: a mirrored curve scores below its original.
#[derive(Debug)]
pub struct ShapeSimilarity<'a> {
    a: &'a Curve,
    b: &'a Curve,
    options: &'a SimilarityOptions,
}

impl<'a> ShapeSimilarity<'a> {
    /// Creates a new `ShapeSimilarity` comparison.
    #[must_use]
    pub fn new(a: &'a Curve, b: &'a Curve, options: &'a SimilarityOptions) -> Self {
        Self { a, b, options }
    }

    /// Executes the comparison, returning the similarity in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `OptionError` if the options are invalid; nothing is computed
    /// in that case.
    pub fn execute(&self) -> Result<f64> {
        self.execute_detailed().map(|c| c.similarity)
    }

    /// Executes the comparison, returning the similarity together with the
    /// alignment it was derived from.
    ///
    /// # Errors
    ///
    /// Returns `OptionError` if the options are invalid.
    pub fn execute_detailed(&self) -> Result<Comparison> {
        self.options.validate()?;
        let n = self.options.estimation_points;

        let a = prepare(self.a, n)?;
        let b = prepare(self.b, n)?;

        let search = self.options.rotation_search();
        let alignment = AlignRotation::new(&a, &b, search).execute()?;
        let similarity = score(alignment.cost, n, self.options.decay_rate);

        debug!(
            points = n,
            ?search,
            rotation = alignment.theta,
            cost = alignment.cost,
            similarity,
            "compared shapes"
        );

        Ok(Comparison {
            similarity,
            rotation: alignment.theta,
            cost: alignment.cost,
        })
    }
}

/// Brings a curve to unit extent, resamples it to `n` points and normalizes it.
fn prepare(curve: &Curve, n: usize) -> Result<Curve> {
    let resampled = Resample::new(&curve.to_unit_extent(), n).execute()?;
    Ok(Normalize::new(&resampled).execute())
}

/// Returns the similarity in `[0, 1]` of two curves.
///
/// Shorthand for `ShapeSimilarity::new(a, b, options).execute()`.
///
/// # Errors
///
/// Returns `OptionError` if the options are invalid.
pub fn shape_similarity(a: &Curve, b: &Curve, options: &SimilarityOptions) -> Result<f64> {
    ShapeSimilarity::new(a, b, options).execute()
}
