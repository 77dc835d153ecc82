pub mod curve2d;

pub use curve2d::{Curve, MIN_CURVE_POINTS};
