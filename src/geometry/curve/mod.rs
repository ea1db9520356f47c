mod arc;
mod segment;

pub use arc::Arc;
pub use segment::Segment;

use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in the plane.
///
/// Evaluation is total: every real parameter maps to a point, even outside
/// [`Curve::domain`].
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn location(&self, t: f64) -> Point2;

    /// Derivative of [`Curve::location`] with respect to `t`. Not normalized.
    fn derivative(&self, t: f64) -> Vector2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
