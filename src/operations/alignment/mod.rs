mod align_rotation;
mod normalize;

pub use align_rotation::{AlignRotation, Alignment, RotationSearch};
pub use normalize::Normalize;
