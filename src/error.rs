use thiserror::Error;

/// Top-level error type for the arc geometry kernel.
#[derive(Debug, Error)]
pub enum ArcMathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} must not be negative")]
    NegativeSize { parameter: &'static str, value: f64 },
}

/// Reasons an ellipse fit can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// The point count is outside the supported range.
    #[error("cannot fit an ellipse through {0} points (expected 1 to 4)")]
    InvalidArity(usize),

    /// The linear system is singular, typically collinear or coincident points.
    #[error("no ellipse passes through the given points")]
    Unsolvable,

    /// The points describe a shape this kernel cannot represent yet.
    #[error("unsupported fit: {0}")]
    MissingFeature(&'static str),

    /// The points lie on a parabola or hyperbola.
    #[error("the points do not lie on an ellipse")]
    NotAnEllipse,
}

/// Errors from the polynomial root solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("polynomial of degree {0} is not supported (maximum is 4)")]
    UnsupportedDegree(usize),

    #[error("polynomial coefficients must be finite")]
    NonFinite,
}

/// Convenience type alias for results using [`ArcMathError`].
pub type Result<T> = std::result::Result<T, ArcMathError>;
