use crate::geometry::{Aabb, Arc};
use crate::math::{Point2, Vector2};

use super::support::support_range;

/// Computes the tight axis-aligned bounding box of an arc.
///
/// Each side comes from the support function along an axis: the full
/// ellipse's extreme (at 0°, 90°, 180° or 270°) when the span contains that
/// angle, otherwise the better of the two endpoints.
pub struct BoundingBox {
    arc: Arc,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(arc: &Arc) -> Self {
        Self { arc: *arc }
    }

    /// Executes the query, returning the AABB.
    #[must_use]
    pub fn execute(&self) -> Aabb {
        let (min_x, max_x) = support_range(&self.arc, &Vector2::x());
        let (min_y, max_y) = support_range(&self.arc, &Vector2::y());
        Aabb::new(Point2::new(min_x, min_y), Point2::new(max_x, max_y))
    }
}
