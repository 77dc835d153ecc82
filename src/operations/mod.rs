pub mod alignment;
pub mod query;
pub mod sampling;

pub use alignment::{AlignRotation, Alignment, Normalize, RotationSearch};
pub use query::FrechetDistance;
pub use sampling::{Resample, Subdivide};
