use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallelism is judged on the sine of the angle between the directions.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if cross.abs() < TOLERANCE * d1.norm() * d2.norm() || cross == 0.0 {
        return None;
    }
    let w = p2 - p1;
    let t = w.perp(d2) / cross;
    let u = w.perp(d1) / cross;
    Some((t, u))
}

/// Intersection of a line (or segment) `a0`→`a1` with the segment `b0`→`b1`.
///
/// When `bounded` is false the first operand is the infinite line through
/// `a0` and `a1`. Returns `(point, t, u)` with `t` the parameter along
/// `a0`→`a1` and `u` in `[0, 1]` along `b0`→`b1`.
#[must_use]
pub fn line_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    bounded: bool,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if u < -eps || u > 1.0 + eps {
        return None;
    }
    if bounded && (t < -eps || t > 1.0 + eps) {
        return None;
    }
    let u = u.clamp(0.0, 1.0);
    Some((b0 + db * u, t, u))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn line_line_perpendicular() {
        let (t, u) = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &p(0.5, -1.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        let r = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &p(0.0, 1.0),
            &Vector2::new(2.0, 0.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn segment_segment_crossing() {
        let (pt, t, u) =
            line_segment_intersect_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0), true)
                .unwrap();
        assert!((pt - p(1.0, 1.0)).norm() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn bounded_segment_falls_short() {
        let a0 = p(0.0, 0.0);
        let a1 = p(0.5, 0.5);
        let b0 = p(0.0, 2.0);
        let b1 = p(2.0, 0.0);
        assert!(line_segment_intersect_2d(&a0, &a1, &b0, &b1, true).is_none());
        // The infinite line through a0, a1 still reaches (1, 1).
        let (pt, t, _) = line_segment_intersect_2d(&a0, &a1, &b0, &b1, false).unwrap();
        assert!((pt - p(1.0, 1.0)).norm() < TOLERANCE);
        assert!((t - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn touching_at_endpoint_counts() {
        let r = line_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0), true);
        assert!(r.is_some());
    }
}
