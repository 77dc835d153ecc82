//! Options for shape similarity computation.
//!
//! # Example
//!
//! ```
//! use shape_similarity::SimilarityOptions;
//!
//! let options = SimilarityOptions::default()
//!     .with_estimation_points(30)
//!     .with_restrict_rotation_angle(0.3);
//! assert!(options.validate().is_ok());
//! ```

use std::f64::consts::PI;

use crate::error::{OptionError, Result};
use crate::geometry::MIN_CURVE_POINTS;
use crate::operations::RotationSearch;

/// Default number of points both curves are resampled to.
pub const DEFAULT_ESTIMATION_POINTS: usize = 50;

/// Default iteration budget of the restricted rotation search.
pub const DEFAULT_ROTATIONS: usize = 20;

/// Default decay rate `k` of the score `exp(-k · residual)`.
pub const DEFAULT_DECAY_RATE: f64 = 8.0;

/// Options for [`ShapeSimilarity`](super::ShapeSimilarity).
///
/// - `estimation_points`: resample count `N` shared by both curves.
///   Fewer points trade accuracy for speed.
/// - `rotations`: golden-section steps of the restricted rotation search.
///   Not consulted when the rotation is unrestricted.
/// - `restrict_rotation_angle`: limits rotations to `[-|a|, |a|]`; `|a|`
///   must not exceed π. `None` allows any rotation.
/// - `check_rotations`: when `false`, curves are compared without rotating.
/// - `decay_rate`: how fast the similarity falls as the residual grows.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityOptions {
    pub estimation_points: usize,
    pub rotations: usize,
    pub restrict_rotation_angle: Option<f64>,
    pub check_rotations: bool,
    pub decay_rate: f64,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            estimation_points: DEFAULT_ESTIMATION_POINTS,
            rotations: DEFAULT_ROTATIONS,
            restrict_rotation_angle: None,
            check_rotations: true,
            decay_rate: DEFAULT_DECAY_RATE,
        }
    }
}

impl SimilarityOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// - `OptionError::InvalidRotationAngle` if `|restrict_rotation_angle| > π`
    ///   (or it is NaN)
    /// - `OptionError::TooFewEstimationPoints` if `estimation_points < 2`
    /// - `OptionError::InvalidDecayRate` if `decay_rate` is not positive and finite
    pub fn validate(&self) -> Result<()> {
        if let Some(angle) = self.restrict_rotation_angle {
            if angle.is_nan() || angle.abs() > PI {
                return Err(OptionError::InvalidRotationAngle(angle).into());
            }
        }
        if self.estimation_points < MIN_CURVE_POINTS {
            return Err(OptionError::TooFewEstimationPoints(self.estimation_points).into());
        }
        if !self.decay_rate.is_finite() || self.decay_rate <= 0.0 {
            return Err(OptionError::InvalidDecayRate(self.decay_rate).into());
        }
        Ok(())
    }

    /// Returns the rotation search these options select.
    #[must_use]
    pub fn rotation_search(&self) -> RotationSearch {
        if !self.check_rotations {
            return RotationSearch::Fixed;
        }
        match self.restrict_rotation_angle {
            Some(angle) => RotationSearch::Restricted {
                bound: angle.abs(),
                iterations: self.rotations,
            },
            None => RotationSearch::Unrestricted,
        }
    }

    /// Set the resample count.
    #[must_use]
    pub const fn with_estimation_points(mut self, points: usize) -> Self {
        self.estimation_points = points;
        self
    }

    /// Set the restricted search iteration budget.
    #[must_use]
    pub const fn with_rotations(mut self, rotations: usize) -> Self {
        self.rotations = rotations;
        self
    }

    /// Restrict rotations to `[-|angle|, |angle|]`.
    #[must_use]
    pub const fn with_restrict_rotation_angle(mut self, angle: f64) -> Self {
        self.restrict_rotation_angle = Some(angle);
        self
    }

    /// Enable/disable rotation alignment.
    #[must_use]
    pub const fn with_check_rotations(mut self, check: bool) -> Self {
        self.check_rotations = check;
        self
    }

    /// Set the score decay rate.
    #[must_use]
    pub const fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }
}
