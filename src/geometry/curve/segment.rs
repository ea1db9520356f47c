use crate::math::{Point2, Vector2};

use super::{Curve, CurveDomain};

/// A bounded line segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` with `t` in `[0, 1]`.
/// The same two points also define the infinite line used by line queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns whether both endpoints are the same point.
    ///
    /// Any non-zero length defines a line, however small.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl Curve for Segment {
    fn location(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    fn derivative(&self, _t: f64) -> Vector2 {
        self.direction()
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
