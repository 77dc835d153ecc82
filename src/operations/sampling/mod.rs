mod resample;
mod subdivide;

pub use resample::Resample;
pub use subdivide::Subdivide;
