use thiserror::Error;

/// Top-level error type for shape similarity computations.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Options(#[from] OptionError),
}

/// Errors related to curve geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("curve needs at least {min} points, got {actual}")]
    TooFewPoints { min: usize, actual: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while validating [`SimilarityOptions`](crate::SimilarityOptions).
#[derive(Debug, Error)]
pub enum OptionError {
    #[error("restrict_rotation_angle cannot be larger than PI, got {0}")]
    InvalidRotationAngle(f64),

    #[error("estimation_points must be at least 2, got {0}")]
    TooFewEstimationPoints(usize),

    #[error("decay_rate must be positive and finite, got {0}")]
    InvalidDecayRate(f64),
}

/// Convenience type alias for results using [`ShapeError`].
pub type Result<T> = std::result::Result<T, ShapeError>;
