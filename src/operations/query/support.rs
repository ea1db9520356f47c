use crate::geometry::Arc;
use crate::math::arc_2d::nearest_span_end;
use crate::math::Vector2;

/// Maximum of `direction · p` over all points `p` of the arc.
///
/// On the full ellipse the maximum is attained at the parametric angle of
/// the direction scaled by the radii. If the span misses that angle, the
/// functional decreases with angular distance from it, so the endpoint
/// closer to it wins.
#[must_use]
pub fn support_max(arc: &Arc, direction: &Vector2) -> f64 {
    let base = direction.dot(&arc.center().coords);
    let scaled = Vector2::new(direction.x * arc.radius_x(), direction.y * arc.radius_y());
    let peak = scaled.y.atan2(scaled.x).to_degrees();

    if arc.contains_angle(peak) {
        return base + scaled.norm();
    }

    let t = nearest_span_end(peak, arc.start_angle(), arc.extent()).to_radians();
    let (sin, cos) = t.sin_cos();
    base + scaled.x * cos + scaled.y * sin
}

/// Projection interval `(min, max)` of the arc onto `direction`.
#[must_use]
pub fn support_range(arc: &Arc, direction: &Vector2) -> (f64, f64) {
    (-support_max(arc, &-direction), support_max(arc, direction))
}
