//! Similarity of planar curves up to translation, uniform scale and rotation.
//!
//! ```
//! use shape_similarity::{shape_similarity, Curve, SimilarityOptions};
//!
//! let a = Curve::from_xy(&[(0.0, 0.0), (2.0, 4.0), (18.0, -3.0)])?;
//! let b = a.scaled(3.0).rotated(1.0);
//!
//! let s = shape_similarity(&a, &b, &SimilarityOptions::default())?;
//! assert!((s - 1.0).abs() < 1e-9);
//! # Ok::<(), shape_similarity::ShapeError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod similarity;

pub use error::{Result, ShapeError};
pub use geometry::Curve;
pub use similarity::{shape_similarity, Comparison, ShapeSimilarity, SimilarityOptions};
